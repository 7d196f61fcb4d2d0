use crate::actor_framework::Entity;
use crate::domain::{Employee, EmployeeCreate, EmployeePatch};
use rust_decimal::Decimal;

impl Entity for Employee {
    type Id = String;
    type CreateParams = EmployeeCreate;
    type Patch = EmployeePatch;
    type Action = ();
    type ActionResult = ();

    fn from_create_params(id: String, params: EmployeeCreate) -> Result<Self, String> {
        params.validate()?;
        Ok(Self {
            id,
            user_id: params.user_id,
            phone_number: params.phone_number,
            role: params.role,
            salary: params.salary,
        })
    }

    fn on_update(&mut self, patch: EmployeePatch) -> Result<(), String> {
        if let Some(phone_number) = patch.phone_number {
            if phone_number.len() < 10 || !phone_number.chars().all(|c| c.is_ascii_digit()) {
                return Err(
                    "Phone number must be at least 10 digits and contain only numbers.".to_string(),
                );
            }
            self.phone_number = phone_number;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(salary) = patch.salary {
            if salary <= Decimal::ZERO {
                return Err("Salary must be a positive number.".to_string());
            }
            self.salary = Some(salary);
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StaffRole;
    use rust_decimal_macros::dec;

    fn create() -> EmployeeCreate {
        EmployeeCreate {
            user_id: "user_1".to_string(),
            phone_number: "0912345678".to_string(),
            role: StaffRole::Garson,
            salary: Some(dec!(1200.50)),
        }
    }

    #[test]
    fn rejects_short_or_non_numeric_phone_numbers() {
        let mut params = create();
        params.phone_number = "12345".to_string();
        assert!(Employee::from_create_params("emp_1".to_string(), params).is_err());

        let mut params = create();
        params.phone_number = "09123abc78".to_string();
        assert!(Employee::from_create_params("emp_1".to_string(), params).is_err());
    }

    #[test]
    fn rejects_non_positive_salary() {
        let mut params = create();
        params.salary = Some(dec!(0));
        assert!(Employee::from_create_params("emp_1".to_string(), params).is_err());
    }

    #[test]
    fn accepts_valid_staff_record() {
        let employee = Employee::from_create_params("emp_1".to_string(), create()).unwrap();
        assert_eq!(employee.role, StaffRole::Garson);
        assert_eq!(employee.salary, Some(dec!(1200.50)));
    }
}
