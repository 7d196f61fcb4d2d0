use std::fmt;

/// Account role. Capability checks are ordinary conditionals in the calling
/// layer, keyed off this enum rather than staff flags or group names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Manager,
    Employee,
    Customer,
}

impl Role {
    pub fn can_manage_catalog(&self) -> bool {
        matches!(self, Role::Manager)
    }

    pub fn can_fulfil_orders(&self) -> bool {
        matches!(self, Role::Manager | Role::Employee)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Manager => "manager",
            Role::Employee => "employee",
            Role::Customer => "customer",
        };
        f.write_str(s)
    }
}

/// Represents a registered user in the system.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Payload for creating a new user. Role defaults to Customer.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<Role>,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<Role>,
}
