use crate::actor_framework::Entity;
use crate::domain::{Discount, DiscountCreate, DiscountPatch};
use chrono::Utc;
use rust_decimal::Decimal;

impl Entity for Discount {
    type Id = String;
    type CreateParams = DiscountCreate;
    type Patch = DiscountPatch;
    type Action = ();
    type ActionResult = ();

    /// The code is the identity; creating the same code twice is a duplicate.
    fn natural_id(params: &DiscountCreate) -> Option<String> {
        Some(params.code.clone())
    }

    fn from_create_params(id: String, params: DiscountCreate) -> Result<Self, String> {
        if params.code.trim().is_empty() {
            return Err("Discount code must not be empty.".to_string());
        }
        if params.percent < Decimal::ZERO || params.percent > Decimal::ONE_HUNDRED {
            return Err("Discount percent must be between 0 and 100.".to_string());
        }
        Ok(Self {
            code: id,
            percent: params.percent,
            is_active: true,
            created_at: Utc::now(),
            expires_at: params.expires_at,
        })
    }

    fn on_update(&mut self, patch: DiscountPatch) -> Result<(), String> {
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(expires_at) = patch.expires_at {
            self.expires_at = expires_at;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
