use crate::actor_framework::ResourceClient;
use crate::discount_actor::DiscountError;
use crate::domain::{Discount, DiscountCreate, DiscountPatch};
use crate::impl_basic_client;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Client for interacting with the Discount actor. Discounts are keyed by
/// their code.
#[derive(Clone)]
pub struct DiscountClient {
    inner: ResourceClient<Discount>,
}

impl_basic_client!(DiscountClient, Discount, DiscountError, discount);

impl DiscountClient {
    #[instrument(skip(self))]
    pub async fn create_discount(&self, params: DiscountCreate) -> Result<String, DiscountError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(DiscountError::from_framework)
    }

    #[instrument(skip(self))]
    pub async fn deactivate(&self, code: String) -> Result<Discount, DiscountError> {
        debug!("Sending request");
        let patch = DiscountPatch { is_active: Some(false), ..DiscountPatch::default() };
        self.inner.update(code, patch).await.map_err(DiscountError::from_framework)
    }

    /// Resolves a code iff it exists, is active and has not expired. Unknown,
    /// inactive and expired codes all come back as `None` so checkout treats
    /// them identically.
    #[instrument(skip(self))]
    pub async fn resolve_active(
        &self,
        code: String,
        now: DateTime<Utc>,
    ) -> Result<Option<Discount>, DiscountError> {
        debug!("Sending request");
        let discount = self.inner.get(code).await.map_err(DiscountError::from_framework)?;
        Ok(discount.filter(|d| d.is_redeemable(now)))
    }
}
