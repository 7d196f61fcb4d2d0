//! Discount codes behind the generic resource actor, keyed by code.

pub mod entity;
pub mod error;

pub use error::*;
