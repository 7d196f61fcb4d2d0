use crate::cart_actor::CartError;
use crate::client_method;
use crate::clients::CatalogClient;
use crate::domain::{Cart, CartLine};
use crate::messages::CartRequest;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Client for interacting with the Cart actor. Holds a catalog client so the
/// add-to-cart path can verify the food actually exists before touching the
/// cart.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
    catalog_client: CatalogClient,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>, catalog_client: CatalogClient) -> Self {
        Self { sender, catalog_client }
    }

    /// Validates the food against the catalog, then accumulates the line.
    #[instrument(skip(self))]
    pub async fn add_to_cart(
        &self,
        customer_id: String,
        food_id: String,
        quantity: u32,
    ) -> Result<CartLine, CartError> {
        match self.catalog_client.get_food(food_id.clone()).await {
            Ok(Some(food)) => info!(food_name = %food.name, "Food validated"),
            Ok(None) => {
                error!("Food not found");
                return Err(CartError::UnknownFood(food_id));
            }
            Err(e) => {
                error!(error = %e, "Food validation failed");
                return Err(CartError::ActorCommunicationError(e.to_string()));
            }
        }
        self.add_line(customer_id, food_id, quantity).await
    }
}

client_method!(CartClient => fn add_line(customer_id: String, food_id: String, quantity: u32) -> CartLine as CartRequest::AddLine, Error = CartError);
client_method!(CartClient => fn remove_line(customer_id: String, line_id: u64) -> () as CartRequest::RemoveLine, Error = CartError);
client_method!(CartClient => fn snapshot(customer_id: String) -> Cart as CartRequest::Snapshot, Error = CartError);
client_method!(CartClient => fn clear(customer_id: String) -> () as CartRequest::Clear, Error = CartError);
