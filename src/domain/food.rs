use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodCategory {
    Irani,
    Kebab,
    Pizza,
    Burger,
    Strips,
    Salad,
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FoodCategory::Irani => "irani",
            FoodCategory::Kebab => "kebab",
            FoodCategory::Pizza => "pizza",
            FoodCategory::Burger => "burger",
            FoodCategory::Strips => "strips",
            FoodCategory::Salad => "salad",
        };
        f.write_str(s)
    }
}

/// A menu item. Unit prices are whole currency units; the aggregate rating is
/// the mean over all ratings for this food, maintained by the catalog actor.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: FoodCategory,
    pub price: u32,
    pub stock: u32,
    pub rating: Decimal,
    pub rating_count: u32,
    pub preparation_minutes: u32,
    pub created_by: String,
}

#[derive(Debug, Clone)]
pub struct FoodCreate {
    pub name: String,
    pub description: String,
    pub category: FoodCategory,
    pub price: u32,
    pub stock: u32,
    pub preparation_minutes: u32,
    pub created_by: String,
}

#[derive(Debug, Clone, Default)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<FoodCategory>,
    pub price: Option<u32>,
    pub stock: Option<u32>,
    pub preparation_minutes: Option<u32>,
}

/// Sort orders offered by the customer-facing menu listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoodSort {
    #[default]
    RatingDesc,
    PriceAsc,
    PriceDesc,
}

/// One line of a batch stock reservation or release.
#[derive(Debug, Clone, PartialEq)]
pub struct StockRequest {
    pub food_id: String,
    pub quantity: u32,
}
