use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Food not found: {0}")]
    NotFound(String),
    #[error("Invalid food: {0}")]
    ValidationError(String),
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
    #[error("Food {food_id} already rated by {user_id}")]
    DuplicateRating { food_id: String, user_id: String },
    #[error("No rating of {food_id} by {user_id}")]
    RatingNotFound { food_id: String, user_id: String },
    #[error("Insufficient stock for {food}: requested {requested}, available {available}")]
    InsufficientStock {
        food: String,
        requested: u32,
        available: u32,
    },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
