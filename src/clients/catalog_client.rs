use crate::catalog_actor::CatalogError;
use crate::client_method;
use crate::domain::{
    Food, FoodCategory, FoodCreate, FoodPatch, FoodRating, FoodSort, StockRequest,
};
use crate::messages::CatalogRequest;
use tokio::sync::mpsc;

/// Client for interacting with the Catalog actor (foods + rating ledger).
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }
}

client_method!(CatalogClient => fn create_food(params: FoodCreate) -> String as CatalogRequest::CreateFood, Error = CatalogError);
client_method!(CatalogClient => fn get_food(id: String) -> Option<Food> as CatalogRequest::GetFood, Error = CatalogError);
client_method!(CatalogClient => fn list_foods(category: Option<FoodCategory>, sort: FoodSort) -> Vec<Food> as CatalogRequest::ListFoods, Error = CatalogError);
client_method!(CatalogClient => fn update_food(id: String, patch: FoodPatch) -> Food as CatalogRequest::UpdateFood, Error = CatalogError);
client_method!(CatalogClient => fn delete_food(id: String) -> () as CatalogRequest::DeleteFood, Error = CatalogError);
client_method!(CatalogClient => fn submit_rating(food_id: String, user_id: String, rating: u8, comment: Option<String>) -> () as CatalogRequest::SubmitRating, Error = CatalogError);
client_method!(CatalogClient => fn revise_rating(food_id: String, user_id: String, rating: u8, comment: Option<String>) -> () as CatalogRequest::ReviseRating, Error = CatalogError);
client_method!(CatalogClient => fn reply_to_rating(food_id: String, user_id: String, reply: String) -> () as CatalogRequest::ReplyToRating, Error = CatalogError);
client_method!(CatalogClient => fn list_ratings(food_id: String) -> Vec<FoodRating> as CatalogRequest::ListRatings, Error = CatalogError);
client_method!(CatalogClient => fn reserve_stock(lines: Vec<StockRequest>) -> () as CatalogRequest::ReserveStock, Error = CatalogError);
client_method!(CatalogClient => fn release_stock(lines: Vec<StockRequest>) -> () as CatalogRequest::ReleaseStock, Error = CatalogError);
