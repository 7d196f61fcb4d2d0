use chrono::{DateTime, Utc};

/// One (food, quantity) pairing within a customer's pending cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: u64,
    pub food_id: String,
    pub quantity: u32,
}

/// Per-customer mutable collection of lines pending purchase. Created lazily
/// on first access; lines die on successful checkout or explicit removal.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub customer_id: String,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn new(customer_id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            customer_id: customer_id.into(),
            created_at,
            lines: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
