//! The order actor is the checkout engine and the order store. It validates
//! the whole checkout before creating anything: cart snapshot, fresh catalog
//! prices, discount resolution, address resolution, then a single batch stock
//! reservation. The order comes into existence only after every check has
//! passed, so a failed checkout leaves no order, no order lines and no stock
//! decrement behind.

pub mod error;

pub use error::*;

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use crate::address_actor::AddressError;
use crate::catalog_actor::CatalogError;
use crate::clients::{AddressClient, CartClient, CatalogClient, DiscountClient, OrderClient};
use crate::domain::{
    round_money, AddressSelection, Food, FoodSales, FoodSort, Order, OrderFilter, OrderLine,
    OrderStatus, StockRequest,
};
use crate::messages::{OrderRequest, ServiceResponse};

pub struct OrderService {
    receiver: mpsc::Receiver<OrderRequest>,
    orders: HashMap<String, Order>,
    next_order_id: u64,
    cart_client: CartClient,
    catalog_client: CatalogClient,
    discount_client: DiscountClient,
    address_client: AddressClient,
}

impl OrderService {
    pub fn new(
        buffer_size: usize,
        cart_client: CartClient,
        catalog_client: CatalogClient,
        discount_client: DiscountClient,
        address_client: AddressClient,
    ) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            orders: HashMap::new(),
            next_order_id: 1,
            cart_client,
            catalog_client,
            discount_client,
            address_client,
        };
        (service, OrderClient::new(sender))
    }

    #[instrument(name = "order_service", skip(self))]
    pub async fn run(mut self) {
        info!("OrderService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::Checkout { customer_id, discount_code, address, respond_to } => {
                    let result = self.checkout(customer_id, discount_code, address).await;
                    let _ = respond_to.send(result);
                }
                OrderRequest::GetOrder { id, customer_id, respond_to } => {
                    let order = self
                        .orders
                        .get(&id)
                        .filter(|o| customer_id.as_ref().map_or(true, |c| &o.customer_id == c))
                        .cloned();
                    let _ = respond_to.send(Ok(order));
                }
                OrderRequest::ListOrders { filter, respond_to } => {
                    let mut orders: Vec<Order> = self
                        .orders
                        .values()
                        .filter(|o| filter.matches(o))
                        .cloned()
                        .collect();
                    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                    let _ = respond_to.send(Ok(orders));
                }
                OrderRequest::CompleteOrder { id, respond_to } => {
                    self.handle_complete(id, respond_to);
                }
                OrderRequest::CancelOrder { customer_id, id, respond_to } => {
                    self.handle_cancel(customer_id, id, respond_to);
                }
                OrderRequest::TopSellingFoods { respond_to } => {
                    let _ = respond_to.send(Ok(self.top_selling_foods()));
                }
                OrderRequest::PopularFoods { respond_to } => {
                    let result = self.popular_foods().await;
                    let _ = respond_to.send(result);
                }
                OrderRequest::RecommendFoods { customer_id, respond_to } => {
                    let result = self.recommend_foods(customer_id).await;
                    let _ = respond_to.send(result);
                }
            }
        }
        info!("OrderService stopped");
    }

    fn comm(e: impl std::fmt::Display) -> OrderError {
        OrderError::ActorCommunicationError(e.to_string())
    }

    /// The cart-to-order transaction. Steps, in order: snapshot the cart,
    /// price every line against the current catalog, resolve the discount,
    /// resolve the shipping address, reserve stock for all lines as one batch,
    /// clear the cart, persist the order. Stock is the only state touched
    /// before the order exists, and it is released again if a later step
    /// fails.
    #[instrument(fields(customer_id = %customer_id), skip(self, discount_code, address))]
    async fn checkout(
        &mut self,
        customer_id: String,
        discount_code: Option<String>,
        address: AddressSelection,
    ) -> Result<Order, OrderError> {
        let cart = self
            .cart_client
            .snapshot(customer_id.clone())
            .await
            .map_err(Self::comm)?;
        if cart.is_empty() {
            error!("Checkout with empty cart");
            return Err(OrderError::EmptyCart);
        }

        // Price every line against the catalog as it stands right now, and
        // freeze those unit prices into the order lines.
        let mut lines = Vec::with_capacity(cart.lines.len());
        let mut subtotal = Decimal::ZERO;
        for cart_line in &cart.lines {
            let food = self
                .catalog_client
                .get_food(cart_line.food_id.clone())
                .await
                .map_err(Self::comm)?
                .ok_or_else(|| OrderError::UnknownFood(cart_line.food_id.clone()))?;
            subtotal += Decimal::from(food.price) * Decimal::from(cart_line.quantity);
            lines.push(OrderLine {
                food_id: food.id,
                food_name: food.name,
                quantity: cart_line.quantity,
                unit_price: food.price,
            });
        }

        let now = Utc::now();
        let (discount_amount, discount_code) =
            match discount_code.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()) {
                Some(code) => {
                    let discount = self
                        .discount_client
                        .resolve_active(code.clone(), now)
                        .await
                        .map_err(Self::comm)?
                        .ok_or_else(|| {
                            error!(code = %code, "Discount rejected");
                            OrderError::InvalidDiscount(code.clone())
                        })?;
                    (discount.apply(subtotal), Some(code))
                }
                None => (Decimal::ZERO, None),
            };
        let total_price = round_money(subtotal - discount_amount);

        let shipping = match address {
            AddressSelection::New(payload) => self
                .address_client
                .add_address(customer_id.clone(), payload)
                .await
                .map_err(|e| match e {
                    AddressError::Invalid(reason) => OrderError::InvalidAddress(reason),
                    other => Self::comm(other),
                })?,
            AddressSelection::Existing(id) => self
                .address_client
                .get_address(customer_id.clone(), id)
                .await
                .map_err(Self::comm)?
                .ok_or(OrderError::MissingAddress)?,
        };

        let stock_lines: Vec<StockRequest> = lines
            .iter()
            .map(|l| StockRequest { food_id: l.food_id.clone(), quantity: l.quantity })
            .collect();
        self.catalog_client
            .reserve_stock(stock_lines.clone())
            .await
            .map_err(|e| match e {
                CatalogError::InsufficientStock { food, requested, available } => {
                    error!(food = %food, "Checkout refused on stock");
                    OrderError::InsufficientStock { food, requested, available }
                }
                CatalogError::NotFound(id) => OrderError::UnknownFood(id),
                other => Self::comm(other),
            })?;

        if let Err(e) = self.cart_client.clear(customer_id.clone()).await {
            // Undo the reservation so a lost cart actor cannot leak stock.
            if let Err(release_err) = self.catalog_client.release_stock(stock_lines).await {
                error!(error = %release_err, "Stock release after failed cart clear also failed");
            }
            return Err(Self::comm(e));
        }

        let id = format!("order_{}", self.next_order_id);
        self.next_order_id += 1;
        let order = Order {
            id: id.clone(),
            customer_id,
            address: shipping.address,
            created_at: now,
            status: OrderStatus::Pending,
            total_price,
            discount_amount,
            discount_code,
            lines,
        };
        self.orders.insert(id.clone(), order.clone());
        info!(order_id = %id, total = %order.total_price, "Order placed");
        Ok(order)
    }

    /// Employee action: pending -> completed, one-way. Completing an order
    /// that is not pending is a no-op signalled by `false`.
    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    fn handle_complete(&mut self, id: String, respond_to: ServiceResponse<bool, OrderError>) {
        let Some(order) = self.orders.get_mut(&id) else {
            let _ = respond_to.send(Err(OrderError::NotFound(id)));
            return;
        };
        if order.status != OrderStatus::Pending {
            let _ = respond_to.send(Ok(false));
            return;
        }
        order.status = OrderStatus::Completed;
        info!("Order completed");
        let _ = respond_to.send(Ok(true));
    }

    /// Customer action: pending -> cancelled, only while the cancellation
    /// window is open. The window is re-evaluated against a fresh clock on
    /// every attempt.
    #[instrument(fields(customer_id = %customer_id, order_id = %id), skip(self, respond_to))]
    fn handle_cancel(
        &mut self,
        customer_id: String,
        id: String,
        respond_to: ServiceResponse<(), OrderError>,
    ) {
        let Some(order) = self.orders.get_mut(&id).filter(|o| o.customer_id == customer_id) else {
            let _ = respond_to.send(Err(OrderError::NotFound(id)));
            return;
        };
        if !order.is_cancellable(Utc::now()) {
            let _ = respond_to.send(Err(OrderError::NotCancellable(id)));
            return;
        }
        order.status = OrderStatus::Cancelled;
        info!("Order cancelled");
        let _ = respond_to.send(Ok(()));
    }

    /// Foods ranked by how many order lines they appear on, top ten.
    fn top_selling_foods(&self) -> Vec<FoodSales> {
        let mut tally: HashMap<String, FoodSales> = HashMap::new();
        for order in self.orders.values() {
            for line in &order.lines {
                tally
                    .entry(line.food_id.clone())
                    .and_modify(|s| s.lines_sold += 1)
                    .or_insert_with(|| FoodSales {
                        food_id: line.food_id.clone(),
                        food_name: line.food_name.clone(),
                        lines_sold: 1,
                    });
            }
        }
        let mut sales: Vec<FoodSales> = tally.into_values().collect();
        sales.sort_by(|a, b| b.lines_sold.cmp(&a.lines_sold).then(a.food_id.cmp(&b.food_id)));
        sales.truncate(10);
        sales
    }

    /// Foods ranked by units sold across completed orders, top five.
    async fn popular_foods(&self) -> Result<Vec<Food>, OrderError> {
        let mut units: HashMap<String, u64> = HashMap::new();
        for order in self.orders.values() {
            if order.status != OrderStatus::Completed {
                continue;
            }
            for line in &order.lines {
                *units.entry(line.food_id.clone()).or_default() += u64::from(line.quantity);
            }
        }
        let mut ranked: Vec<(String, u64)> = units.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(5);

        let mut foods = Vec::with_capacity(ranked.len());
        for (food_id, _) in ranked {
            // Foods removed from the menu since the order drop out silently.
            if let Some(food) = self
                .catalog_client
                .get_food(food_id)
                .await
                .map_err(Self::comm)?
            {
                foods.push(food);
            }
        }
        Ok(foods)
    }

    /// Foods in categories the customer has ordered from before, minus the
    /// foods they have already ordered.
    async fn recommend_foods(&self, customer_id: String) -> Result<Vec<Food>, OrderError> {
        let ordered_ids: HashSet<String> = self
            .orders
            .values()
            .filter(|o| o.customer_id == customer_id)
            .flat_map(|o| o.lines.iter().map(|l| l.food_id.clone()))
            .collect();
        if ordered_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut categories = HashSet::new();
        for food_id in &ordered_ids {
            if let Some(food) = self
                .catalog_client
                .get_food(food_id.clone())
                .await
                .map_err(Self::comm)?
            {
                categories.insert(food.category);
            }
        }

        let all = self
            .catalog_client
            .list_foods(None, FoodSort::RatingDesc)
            .await
            .map_err(Self::comm)?;
        Ok(all
            .into_iter()
            .filter(|f| categories.contains(&f.category) && !ordered_ids.contains(&f.id))
            .collect())
    }
}
