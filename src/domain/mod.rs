pub mod address;
pub mod cart;
pub mod discount;
pub mod employee;
pub mod food;
pub mod order;
pub mod rating;
pub mod user;

pub use address::*;
pub use cart::*;
pub use discount::*;
pub use employee::*;
pub use food::*;
pub use order::*;
pub use rating::*;
pub use user::*;

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a money amount to cents at the point of persistence.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
