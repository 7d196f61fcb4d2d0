use tokio::sync::oneshot;

use crate::address_actor::AddressError;
use crate::cart_actor::CartError;
use crate::catalog_actor::CatalogError;
use crate::domain::{
    Address, AddressPayload, AddressSelection, Cart, CartLine, Food, FoodCategory, FoodCreate,
    FoodPatch, FoodRating, FoodSales, FoodSort, Order, OrderFilter, StockRequest,
};
use crate::order_actor::OrderError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed message enums for the hand-written actors. Each variant carries its
/// parameters and a oneshot channel for the response.

#[derive(Debug)]
pub enum CatalogRequest {
    CreateFood {
        params: FoodCreate,
        respond_to: ServiceResponse<String, CatalogError>,
    },
    GetFood {
        id: String,
        respond_to: ServiceResponse<Option<Food>, CatalogError>,
    },
    ListFoods {
        category: Option<FoodCategory>,
        sort: FoodSort,
        respond_to: ServiceResponse<Vec<Food>, CatalogError>,
    },
    UpdateFood {
        id: String,
        patch: FoodPatch,
        respond_to: ServiceResponse<Food, CatalogError>,
    },
    DeleteFood {
        id: String,
        respond_to: ServiceResponse<(), CatalogError>,
    },
    SubmitRating {
        food_id: String,
        user_id: String,
        rating: u8,
        comment: Option<String>,
        respond_to: ServiceResponse<(), CatalogError>,
    },
    ReviseRating {
        food_id: String,
        user_id: String,
        rating: u8,
        comment: Option<String>,
        respond_to: ServiceResponse<(), CatalogError>,
    },
    ReplyToRating {
        food_id: String,
        user_id: String,
        reply: String,
        respond_to: ServiceResponse<(), CatalogError>,
    },
    ListRatings {
        food_id: String,
        respond_to: ServiceResponse<Vec<FoodRating>, CatalogError>,
    },
    ReserveStock {
        lines: Vec<StockRequest>,
        respond_to: ServiceResponse<(), CatalogError>,
    },
    ReleaseStock {
        lines: Vec<StockRequest>,
        respond_to: ServiceResponse<(), CatalogError>,
    },
}

#[derive(Debug)]
pub enum CartRequest {
    AddLine {
        customer_id: String,
        food_id: String,
        quantity: u32,
        respond_to: ServiceResponse<CartLine, CartError>,
    },
    RemoveLine {
        customer_id: String,
        line_id: u64,
        respond_to: ServiceResponse<(), CartError>,
    },
    Snapshot {
        customer_id: String,
        respond_to: ServiceResponse<Cart, CartError>,
    },
    Clear {
        customer_id: String,
        respond_to: ServiceResponse<(), CartError>,
    },
}

#[derive(Debug)]
pub enum AddressRequest {
    Add {
        customer_id: String,
        payload: AddressPayload,
        respond_to: ServiceResponse<Address, AddressError>,
    },
    Get {
        customer_id: String,
        id: String,
        respond_to: ServiceResponse<Option<Address>, AddressError>,
    },
    List {
        customer_id: String,
        respond_to: ServiceResponse<Vec<Address>, AddressError>,
    },
    Delete {
        customer_id: String,
        id: String,
        respond_to: ServiceResponse<(), AddressError>,
    },
    SetDefault {
        customer_id: String,
        id: String,
        respond_to: ServiceResponse<(), AddressError>,
    },
}

#[derive(Debug)]
pub enum OrderRequest {
    Checkout {
        customer_id: String,
        discount_code: Option<String>,
        address: AddressSelection,
        respond_to: ServiceResponse<Order, OrderError>,
    },
    GetOrder {
        id: String,
        customer_id: Option<String>,
        respond_to: ServiceResponse<Option<Order>, OrderError>,
    },
    ListOrders {
        filter: OrderFilter,
        respond_to: ServiceResponse<Vec<Order>, OrderError>,
    },
    CompleteOrder {
        id: String,
        respond_to: ServiceResponse<bool, OrderError>,
    },
    CancelOrder {
        customer_id: String,
        id: String,
        respond_to: ServiceResponse<(), OrderError>,
    },
    TopSellingFoods {
        respond_to: ServiceResponse<Vec<FoodSales>, OrderError>,
    },
    PopularFoods {
        respond_to: ServiceResponse<Vec<Food>, OrderError>,
    },
    RecommendFoods {
        customer_id: String,
        respond_to: ServiceResponse<Vec<Food>, OrderError>,
    },
}
