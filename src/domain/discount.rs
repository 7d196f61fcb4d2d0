use crate::domain::round_money;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A percent-off code redeemable while active and unexpired.
#[derive(Debug, Clone, PartialEq)]
pub struct Discount {
    pub code: String,
    pub percent: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DiscountCreate {
    pub code: String,
    pub percent: Decimal,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct DiscountPatch {
    pub is_active: Option<bool>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Discount {
    pub fn is_redeemable(&self, now: DateTime<Utc>) -> bool {
        self.is_active && now <= self.expires_at
    }

    /// Amount taken off `total`, rounded to cents.
    pub fn apply(&self, total: Decimal) -> Decimal {
        round_money(total * self.percent / Decimal::ONE_HUNDRED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn discount(percent: Decimal, active: bool, expires_in: Duration) -> Discount {
        let now = Utc::now();
        Discount {
            code: "SAVE".to_string(),
            percent,
            is_active: active,
            created_at: now,
            expires_at: now + expires_in,
        }
    }

    #[test]
    fn applies_percent_and_rounds_to_cents() {
        let d = discount(dec!(10), true, Duration::days(1));
        assert_eq!(d.apply(dec!(100)), dec!(10.00));

        let d = discount(dec!(12.5), true, Duration::days(1));
        assert_eq!(d.apply(dec!(99)), dec!(12.38));
    }

    #[test]
    fn redeemable_only_while_active_and_unexpired() {
        let now = Utc::now();
        assert!(discount(dec!(5), true, Duration::hours(1)).is_redeemable(now));
        assert!(!discount(dec!(5), false, Duration::hours(1)).is_redeemable(now));
        assert!(!discount(dec!(5), true, Duration::hours(-1)).is_redeemable(now));
    }
}
