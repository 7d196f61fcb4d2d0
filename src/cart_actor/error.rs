use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),
    #[error("Adding {0} would overflow the line quantity")]
    QuantityOverflow(u32),
    #[error("Cart line not found: {0}")]
    LineNotFound(u64),
    #[error("Food not found: {0}")]
    UnknownFood(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
