use crate::actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during employee operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmployeeError {
    #[error("Employee not found: {0}")]
    NotFound(String),
    #[error("Employee validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl EmployeeError {
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => EmployeeError::NotFound(id),
            FrameworkError::Rejected(msg) => EmployeeError::ValidationError(msg),
            other => EmployeeError::ActorCommunicationError(other.to_string()),
        }
    }
}
