use thiserror::Error;

/// Errors that can occur during address-book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AddressError {
    #[error("Invalid address: {0}")]
    Invalid(String),
    #[error("Address not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
