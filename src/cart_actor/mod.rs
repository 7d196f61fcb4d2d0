//! The cart actor owns every customer's pending cart. Carts are created
//! lazily on first access; adding a food already in the cart accumulates the
//! line quantity instead of duplicating the line.

pub mod error;

pub use error::*;

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::clients::{CartClient, CatalogClient};
use crate::domain::{Cart, CartLine};
use crate::messages::{CartRequest, ServiceResponse};

pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    carts: HashMap<String, Cart>,
    next_line_id: u64,
}

impl CartService {
    pub fn new(buffer_size: usize, catalog_client: CatalogClient) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            carts: HashMap::new(),
            next_line_id: 1,
        };
        (service, CartClient::new(sender, catalog_client))
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!("CartService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddLine { customer_id, food_id, quantity, respond_to } => {
                    self.handle_add_line(customer_id, food_id, quantity, respond_to);
                }
                CartRequest::RemoveLine { customer_id, line_id, respond_to } => {
                    self.handle_remove_line(customer_id, line_id, respond_to);
                }
                CartRequest::Snapshot { customer_id, respond_to } => {
                    let cart = self.get_or_create(customer_id).clone();
                    let _ = respond_to.send(Ok(cart));
                }
                CartRequest::Clear { customer_id, respond_to } => {
                    if let Some(cart) = self.carts.get_mut(&customer_id) {
                        cart.lines.clear();
                    }
                    let _ = respond_to.send(Ok(()));
                }
            }
        }
        info!("CartService stopped");
    }

    fn get_or_create(&mut self, customer_id: String) -> &mut Cart {
        self.carts
            .entry(customer_id.clone())
            .or_insert_with(|| Cart::new(customer_id, Utc::now()))
    }

    /// Requesting quantity N always adds exactly N to the line; a fresh line
    /// ends up holding N.
    #[instrument(fields(customer_id = %customer_id, food_id = %food_id), skip(self, respond_to))]
    fn handle_add_line(
        &mut self,
        customer_id: String,
        food_id: String,
        quantity: u32,
        respond_to: ServiceResponse<CartLine, CartError>,
    ) {
        if quantity < 1 {
            let _ = respond_to.send(Err(CartError::InvalidQuantity(quantity)));
            return;
        }
        let next_line_id = self.next_line_id;
        let cart = self.get_or_create(customer_id);
        let (line, created) = match cart.lines.iter_mut().find(|l| l.food_id == food_id) {
            Some(line) => {
                let Some(total) = line.quantity.checked_add(quantity) else {
                    let _ = respond_to.send(Err(CartError::QuantityOverflow(quantity)));
                    return;
                };
                line.quantity = total;
                (line.clone(), false)
            }
            None => {
                let line = CartLine { id: next_line_id, food_id, quantity };
                cart.lines.push(line.clone());
                (line, true)
            }
        };
        if created {
            self.next_line_id += 1;
        }
        debug!(line_id = line.id, quantity = line.quantity, "Cart line updated");
        let _ = respond_to.send(Ok(line));
    }

    /// Lines can only be removed from the caller's own cart.
    #[instrument(fields(customer_id = %customer_id, line_id = line_id), skip(self, respond_to))]
    fn handle_remove_line(
        &mut self,
        customer_id: String,
        line_id: u64,
        respond_to: ServiceResponse<(), CartError>,
    ) {
        let Some(cart) = self.carts.get_mut(&customer_id) else {
            let _ = respond_to.send(Err(CartError::LineNotFound(line_id)));
            return;
        };
        let before = cart.lines.len();
        cart.lines.retain(|l| l.id != line_id);
        if cart.lines.len() == before {
            let _ = respond_to.send(Err(CartError::LineNotFound(line_id)));
            return;
        }
        let _ = respond_to.send(Ok(()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::CatalogRequest;

    fn bare_client() -> (CartClient, CartService) {
        // A catalog client over a dangling channel; these tests go straight
        // to the cart actor and never touch the catalog.
        let (catalog_sender, _catalog_receiver) = mpsc::channel::<CatalogRequest>(1);
        let catalog_client = CatalogClient::new(catalog_sender);
        let (service, client) = CartService::new(16, catalog_client);
        (client, service)
    }

    #[tokio::test]
    async fn quantities_accumulate_on_the_same_line() {
        let (client, service) = bare_client();
        tokio::spawn(service.run());

        let line = client
            .add_line("user_1".to_string(), "food_1".to_string(), 2)
            .await
            .unwrap();
        assert_eq!(line.quantity, 2);

        let line = client
            .add_line("user_1".to_string(), "food_1".to_string(), 3)
            .await
            .unwrap();
        assert_eq!(line.quantity, 5);

        let cart = client.snapshot("user_1".to_string()).await.unwrap();
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 5);
    }

    #[tokio::test]
    async fn zero_quantity_is_rejected() {
        let (client, service) = bare_client();
        tokio::spawn(service.run());

        let err = client
            .add_line("user_1".to_string(), "food_1".to_string(), 0)
            .await
            .unwrap_err();
        assert_eq!(err, CartError::InvalidQuantity(0));
    }

    #[tokio::test]
    async fn line_quantity_cannot_overflow() {
        let (client, service) = bare_client();
        tokio::spawn(service.run());

        client
            .add_line("user_1".to_string(), "food_1".to_string(), u32::MAX)
            .await
            .unwrap();

        let err = client
            .add_line("user_1".to_string(), "food_1".to_string(), 1)
            .await
            .unwrap_err();
        assert_eq!(err, CartError::QuantityOverflow(1));

        // The line keeps its previous quantity.
        let cart = client.snapshot("user_1".to_string()).await.unwrap();
        assert_eq!(cart.lines[0].quantity, u32::MAX);
    }

    #[tokio::test]
    async fn lines_are_owned_by_their_customer() {
        let (client, service) = bare_client();
        tokio::spawn(service.run());

        let line = client
            .add_line("user_1".to_string(), "food_1".to_string(), 1)
            .await
            .unwrap();

        let err = client
            .remove_line("user_2".to_string(), line.id)
            .await
            .unwrap_err();
        assert_eq!(err, CartError::LineNotFound(line.id));

        client.remove_line("user_1".to_string(), line.id).await.unwrap();
        let cart = client.snapshot("user_1".to_string()).await.unwrap();
        assert!(cart.is_empty());
    }
}
