use crate::actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("User already exists: {0}")]
    AlreadyExists(String),
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl UserError {
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::Duplicate(id) => UserError::AlreadyExists(id),
            FrameworkError::Rejected(msg) => UserError::ValidationError(msg),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
