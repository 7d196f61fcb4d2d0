use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffRole {
    Garson,
    Staff,
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StaffRole::Garson => "garson",
            StaffRole::Staff => "staff",
        };
        f.write_str(s)
    }
}

/// Staff record tied to a user account.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: String,
    pub user_id: String,
    pub phone_number: String,
    pub role: StaffRole,
    pub salary: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct EmployeeCreate {
    pub user_id: String,
    pub phone_number: String,
    pub role: StaffRole,
    pub salary: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct EmployeePatch {
    pub phone_number: Option<String>,
    pub role: Option<StaffRole>,
    pub salary: Option<Decimal>,
}

impl EmployeeCreate {
    /// Phone numbers are digits only and at least 10 characters; salaries,
    /// when given, must be positive.
    pub fn validate(&self) -> Result<(), String> {
        if self.phone_number.len() < 10 || !self.phone_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(
                "Phone number must be at least 10 digits and contain only numbers.".to_string(),
            );
        }
        if let Some(salary) = self.salary {
            if salary <= Decimal::ZERO {
                return Err("Salary must be a positive number.".to_string());
            }
        }
        Ok(())
    }
}
