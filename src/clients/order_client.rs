use crate::client_method;
use crate::domain::{AddressSelection, Food, FoodSales, Order, OrderFilter};
use crate::messages::OrderRequest;
use crate::order_actor::OrderError;
use tokio::sync::mpsc;

/// Client for interacting with the Order actor. The checkout orchestration
/// itself lives in the actor, so this client stays thin.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }
}

client_method!(OrderClient => fn checkout(customer_id: String, discount_code: Option<String>, address: AddressSelection) -> Order as OrderRequest::Checkout, Error = OrderError);
client_method!(OrderClient => fn get_order(id: String, customer_id: Option<String>) -> Option<Order> as OrderRequest::GetOrder, Error = OrderError);
client_method!(OrderClient => fn list_orders(filter: OrderFilter) -> Vec<Order> as OrderRequest::ListOrders, Error = OrderError);
client_method!(OrderClient => fn complete_order(id: String) -> bool as OrderRequest::CompleteOrder, Error = OrderError);
client_method!(OrderClient => fn cancel_order(customer_id: String, id: String) -> () as OrderRequest::CancelOrder, Error = OrderError);
client_method!(OrderClient => fn top_selling_foods() -> Vec<FoodSales> as OrderRequest::TopSellingFoods, Error = OrderError);
client_method!(OrderClient => fn popular_foods() -> Vec<Food> as OrderRequest::PopularFoods, Error = OrderError);
client_method!(OrderClient => fn recommend_foods(customer_id: String) -> Vec<Food> as OrderRequest::RecommendFoods, Error = OrderError);
