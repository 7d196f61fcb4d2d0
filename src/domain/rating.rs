use chrono::{DateTime, Utc};

/// One customer's rating of one food; unique per (food, user).
#[derive(Debug, Clone, PartialEq)]
pub struct FoodRating {
    pub food_id: String,
    pub user_id: String,
    pub rating: u8,
    pub comment: Option<String>,
    pub reply: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl FoodRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn is_valid_score(rating: u8) -> bool {
        (Self::MIN..=Self::MAX).contains(&rating)
    }
}
