use thiserror::Error;

/// Errors surfaced by checkout and the order state machine. All are
/// recoverable at the request boundary; nothing here is fatal.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Invalid or expired discount code: {0}")]
    InvalidDiscount(String),
    #[error("No shipping address selected")]
    MissingAddress,
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Insufficient stock for {food}: requested {requested}, available {available}")]
    InsufficientStock {
        food: String,
        requested: u32,
        available: u32,
    },
    #[error("Food no longer on the menu: {0}")]
    UnknownFood(String),
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Order can no longer be cancelled: {0}")]
    NotCancellable(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
