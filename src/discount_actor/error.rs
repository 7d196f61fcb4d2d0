use crate::actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during discount-code operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DiscountError {
    #[error("Discount code not found: {0}")]
    NotFound(String),
    #[error("Discount code already exists: {0}")]
    AlreadyExists(String),
    #[error("Discount validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl DiscountError {
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(code) => DiscountError::NotFound(code),
            FrameworkError::Duplicate(code) => DiscountError::AlreadyExists(code),
            FrameworkError::Rejected(msg) => DiscountError::ValidationError(msg),
            other => DiscountError::ActorCommunicationError(other.to_string()),
        }
    }
}
