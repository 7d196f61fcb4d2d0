use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::address_actor::AddressService;
use crate::cart_actor::CartService;
use crate::catalog_actor::CatalogService;
use crate::clients::{
    AddressClient, CartClient, CatalogClient, DiscountClient, EmployeeClient, OrderClient,
    UserClient,
};
use crate::domain::{Discount, Employee, User};
use crate::order_actor::OrderService;

const CHANNEL_BUFFER: usize = 32;

fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{prefix}_{id}")
    }
}

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling
/// shutdown.
pub struct OrderSystem {
    pub user_client: UserClient,
    pub employee_client: EmployeeClient,
    pub discount_client: DiscountClient,
    pub catalog_client: CatalogClient,
    pub cart_client: CartClient,
    pub address_client: AddressClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    pub fn new() -> Self {
        // Generic resource actors.
        let (user_actor, user_resource_client) =
            ResourceActor::<User>::new(CHANNEL_BUFFER, sequential_ids("user"));
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        let (employee_actor, employee_resource_client) =
            ResourceActor::<Employee>::new(CHANNEL_BUFFER, sequential_ids("employee"));
        let employee_client = EmployeeClient::new(employee_resource_client);
        let employee_handle = tokio::spawn(employee_actor.run());

        // Discounts are keyed by code, so the id generator never fires.
        let (discount_actor, discount_resource_client) =
            ResourceActor::<Discount>::new(CHANNEL_BUFFER, sequential_ids("discount"));
        let discount_client = DiscountClient::new(discount_resource_client);
        let discount_handle = tokio::spawn(discount_actor.run());

        // Hand-written service actors.
        let (catalog_service, catalog_client) = CatalogService::new(CHANNEL_BUFFER);
        let catalog_handle = tokio::spawn(catalog_service.run());

        let (cart_service, cart_client) =
            CartService::new(CHANNEL_BUFFER, catalog_client.clone());
        let cart_handle = tokio::spawn(cart_service.run());

        let (address_service, address_client) = AddressService::new(CHANNEL_BUFFER);
        let address_handle = tokio::spawn(address_service.run());

        let (order_service, order_client) = OrderService::new(
            CHANNEL_BUFFER,
            cart_client.clone(),
            catalog_client.clone(),
            discount_client.clone(),
            address_client.clone(),
        );
        let order_handle = tokio::spawn(order_service.run());

        Self {
            user_client,
            employee_client,
            discount_client,
            catalog_client,
            cart_client,
            address_client,
            order_client,
            handles: vec![
                user_handle,
                employee_handle,
                discount_handle,
                catalog_handle,
                cart_handle,
                address_handle,
                order_handle,
            ],
        }
    }

    /// Drops every client so the channels close, then waits for the actors to
    /// drain. The order actor holds clones of the other clients, so its
    /// channel closing cascades into theirs.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.cart_client);
        drop(self.catalog_client);
        drop(self.address_client);
        drop(self.discount_client);
        drop(self.employee_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
