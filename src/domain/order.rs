use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Minutes after creation during which a pending order may still be cancelled.
pub const CANCELLATION_WINDOW_MINUTES: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// One purchased line. The unit price is frozen at checkout time so later
/// catalog price edits cannot rewrite order history.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub food_id: String,
    pub food_name: String,
    pub quantity: u32,
    pub unit_price: u32,
}

impl OrderLine {
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.unit_price) * Decimal::from(self.quantity)
    }
}

/// An immutable record of a purchase. Only `status` ever changes, and only
/// forward: pending -> completed | cancelled.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub total_price: Decimal,
    pub discount_amount: Decimal,
    pub discount_code: Option<String>,
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// A pure function of the stored timestamp and the supplied clock;
    /// re-evaluated on every check, never cached.
    pub fn is_cancellable(&self, now: DateTime<Utc>) -> bool {
        self.status == OrderStatus::Pending
            && now <= self.created_at + Duration::minutes(CANCELLATION_WINDOW_MINUTES)
    }
}

/// Filters for the order listing screens.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub customer_id: Option<String>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }
        if let Some(from) = self.from {
            if order.created_at < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if order.created_at > to {
                return false;
            }
        }
        if let Some(customer_id) = &self.customer_id {
            if &order.customer_id != customer_id {
                return false;
            }
        }
        true
    }
}

/// Sales tally for the top-selling listing: number of order lines per food.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodSales {
    pub food_id: String,
    pub food_name: String,
    pub lines_sold: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn order(status: OrderStatus, created_at: DateTime<Utc>) -> Order {
        Order {
            id: "order_1".to_string(),
            customer_id: "user_1".to_string(),
            address: "Valiasr12Avenue".to_string(),
            created_at,
            status,
            total_price: dec!(90.00),
            discount_amount: dec!(10.00),
            discount_code: Some("SAVE10".to_string()),
            lines: vec![OrderLine {
                food_id: "food_1".to_string(),
                food_name: "Koobideh".to_string(),
                quantity: 5,
                unit_price: 20,
            }],
        }
    }

    #[test]
    fn cancellable_within_thirty_minutes_of_creation() {
        let created = Utc::now();
        let o = order(OrderStatus::Pending, created);
        assert!(o.is_cancellable(created + Duration::minutes(29)));
        assert!(!o.is_cancellable(created + Duration::minutes(31)));
    }

    #[test]
    fn terminal_states_are_never_cancellable() {
        let created = Utc::now();
        assert!(!order(OrderStatus::Completed, created).is_cancellable(created));
        assert!(!order(OrderStatus::Cancelled, created).is_cancellable(created));
    }

    #[test]
    fn line_total_uses_frozen_unit_price() {
        let o = order(OrderStatus::Pending, Utc::now());
        assert_eq!(o.lines[0].line_total(), dec!(100));
    }

    #[test]
    fn filter_matches_on_status_window_and_customer() {
        let created = Utc::now();
        let o = order(OrderStatus::Pending, created);

        let mut filter = OrderFilter::default();
        assert!(filter.matches(&o));

        filter.status = Some(OrderStatus::Completed);
        assert!(!filter.matches(&o));

        let filter = OrderFilter {
            status: Some(OrderStatus::Pending),
            from: Some(created - Duration::days(1)),
            to: Some(created + Duration::days(1)),
            customer_id: Some("user_1".to_string()),
        };
        assert!(filter.matches(&o));

        let filter = OrderFilter {
            customer_id: Some("user_2".to_string()),
            ..OrderFilter::default()
        };
        assert!(!filter.matches(&o));
    }
}
