//! The catalog actor owns the menu and the rating ledger. Keeping foods and
//! their ratings behind one mailbox makes the aggregate-rating recompute and
//! the batch stock reservation atomic with respect to every other request.

pub mod error;

pub use error::*;

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::clients::CatalogClient;
use crate::domain::{
    round_money, Food, FoodCategory, FoodCreate, FoodPatch, FoodRating, FoodSort, StockRequest,
};
use crate::messages::{CatalogRequest, ServiceResponse};

pub struct CatalogService {
    receiver: mpsc::Receiver<CatalogRequest>,
    foods: HashMap<String, Food>,
    ratings: HashMap<(String, String), FoodRating>,
    next_food_id: u64,
}

impl CatalogService {
    pub fn new(buffer_size: usize) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            foods: HashMap::new(),
            ratings: HashMap::new(),
            next_food_id: 1,
        };
        (service, CatalogClient::new(sender))
    }

    #[instrument(name = "catalog_service", skip(self))]
    pub async fn run(mut self) {
        info!("CatalogService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::CreateFood { params, respond_to } => {
                    self.handle_create_food(params, respond_to);
                }
                CatalogRequest::GetFood { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.foods.get(&id).cloned()));
                }
                CatalogRequest::ListFoods { category, sort, respond_to } => {
                    let _ = respond_to.send(Ok(self.list_foods(category, sort)));
                }
                CatalogRequest::UpdateFood { id, patch, respond_to } => {
                    self.handle_update_food(id, patch, respond_to);
                }
                CatalogRequest::DeleteFood { id, respond_to } => {
                    self.handle_delete_food(id, respond_to);
                }
                CatalogRequest::SubmitRating { food_id, user_id, rating, comment, respond_to } => {
                    self.handle_submit_rating(food_id, user_id, rating, comment, respond_to);
                }
                CatalogRequest::ReviseRating { food_id, user_id, rating, comment, respond_to } => {
                    self.handle_revise_rating(food_id, user_id, rating, comment, respond_to);
                }
                CatalogRequest::ReplyToRating { food_id, user_id, reply, respond_to } => {
                    self.handle_reply_to_rating(food_id, user_id, reply, respond_to);
                }
                CatalogRequest::ListRatings { food_id, respond_to } => {
                    let mut ratings: Vec<FoodRating> = self
                        .ratings
                        .values()
                        .filter(|r| r.food_id == food_id)
                        .cloned()
                        .collect();
                    ratings.sort_by(|a, b| a.created_at.cmp(&b.created_at));
                    let _ = respond_to.send(Ok(ratings));
                }
                CatalogRequest::ReserveStock { lines, respond_to } => {
                    self.handle_reserve_stock(lines, respond_to);
                }
                CatalogRequest::ReleaseStock { lines, respond_to } => {
                    self.handle_release_stock(lines, respond_to);
                }
            }
        }
        info!("CatalogService stopped");
    }

    #[instrument(fields(name = %params.name), skip(self, params, respond_to))]
    fn handle_create_food(
        &mut self,
        params: FoodCreate,
        respond_to: ServiceResponse<String, CatalogError>,
    ) {
        if params.name.trim().is_empty() {
            let _ = respond_to.send(Err(CatalogError::ValidationError(
                "Food name must not be empty.".to_string(),
            )));
            return;
        }
        let id = format!("food_{}", self.next_food_id);
        self.next_food_id += 1;
        let food = Food {
            id: id.clone(),
            name: params.name,
            description: params.description,
            category: params.category,
            price: params.price,
            stock: params.stock,
            rating: Decimal::ZERO,
            rating_count: 0,
            preparation_minutes: params.preparation_minutes,
            created_by: params.created_by,
        };
        self.foods.insert(id.clone(), food);
        info!(food_id = %id, "Food created");
        let _ = respond_to.send(Ok(id));
    }

    fn list_foods(&self, category: Option<FoodCategory>, sort: FoodSort) -> Vec<Food> {
        let mut foods: Vec<Food> = self
            .foods
            .values()
            .filter(|f| category.map_or(true, |c| f.category == c))
            .cloned()
            .collect();
        match sort {
            FoodSort::RatingDesc => foods.sort_by(|a, b| b.rating.cmp(&a.rating)),
            FoodSort::PriceAsc => foods.sort_by(|a, b| a.price.cmp(&b.price)),
            FoodSort::PriceDesc => foods.sort_by(|a, b| b.price.cmp(&a.price)),
        }
        foods
    }

    #[instrument(fields(food_id = %id), skip(self, patch, respond_to))]
    fn handle_update_food(
        &mut self,
        id: String,
        patch: FoodPatch,
        respond_to: ServiceResponse<Food, CatalogError>,
    ) {
        let Some(food) = self.foods.get_mut(&id) else {
            let _ = respond_to.send(Err(CatalogError::NotFound(id)));
            return;
        };
        if let Some(name) = patch.name {
            food.name = name;
        }
        if let Some(description) = patch.description {
            food.description = description;
        }
        if let Some(category) = patch.category {
            food.category = category;
        }
        if let Some(price) = patch.price {
            food.price = price;
        }
        if let Some(stock) = patch.stock {
            food.stock = stock;
        }
        if let Some(preparation_minutes) = patch.preparation_minutes {
            food.preparation_minutes = preparation_minutes;
        }
        let _ = respond_to.send(Ok(food.clone()));
    }

    #[instrument(fields(food_id = %id), skip(self, respond_to))]
    fn handle_delete_food(&mut self, id: String, respond_to: ServiceResponse<(), CatalogError>) {
        if self.foods.remove(&id).is_none() {
            let _ = respond_to.send(Err(CatalogError::NotFound(id)));
            return;
        }
        self.ratings.retain(|(food_id, _), _| food_id != &id);
        let _ = respond_to.send(Ok(()));
    }

    /// Create-only rating path; a second rating by the same user is rejected.
    #[instrument(fields(food_id = %food_id, user_id = %user_id), skip(self, comment, respond_to))]
    fn handle_submit_rating(
        &mut self,
        food_id: String,
        user_id: String,
        rating: u8,
        comment: Option<String>,
        respond_to: ServiceResponse<(), CatalogError>,
    ) {
        let result = self.insert_rating(food_id, user_id, rating, comment, false);
        let _ = respond_to.send(result);
    }

    /// Upsert rating path; an existing rating is updated in place.
    #[instrument(fields(food_id = %food_id, user_id = %user_id), skip(self, comment, respond_to))]
    fn handle_revise_rating(
        &mut self,
        food_id: String,
        user_id: String,
        rating: u8,
        comment: Option<String>,
        respond_to: ServiceResponse<(), CatalogError>,
    ) {
        let result = self.insert_rating(food_id, user_id, rating, comment, true);
        let _ = respond_to.send(result);
    }

    fn insert_rating(
        &mut self,
        food_id: String,
        user_id: String,
        rating: u8,
        comment: Option<String>,
        allow_update: bool,
    ) -> Result<(), CatalogError> {
        if !self.foods.contains_key(&food_id) {
            return Err(CatalogError::NotFound(food_id));
        }
        if !FoodRating::is_valid_score(rating) {
            return Err(CatalogError::InvalidRating(rating));
        }
        let key = (food_id.clone(), user_id.clone());
        let now = Utc::now();
        match self.ratings.get_mut(&key) {
            Some(existing) => {
                if !allow_update {
                    return Err(CatalogError::DuplicateRating { food_id, user_id });
                }
                existing.rating = rating;
                existing.comment = comment;
                existing.modified_at = now;
            }
            None => {
                self.ratings.insert(
                    key,
                    FoodRating {
                        food_id: food_id.clone(),
                        user_id,
                        rating,
                        comment,
                        reply: None,
                        created_at: now,
                        modified_at: now,
                    },
                );
            }
        }
        self.recompute_rating(&food_id);
        Ok(())
    }

    #[instrument(fields(food_id = %food_id, user_id = %user_id), skip(self, reply, respond_to))]
    fn handle_reply_to_rating(
        &mut self,
        food_id: String,
        user_id: String,
        reply: String,
        respond_to: ServiceResponse<(), CatalogError>,
    ) {
        let key = (food_id.clone(), user_id.clone());
        let Some(rating) = self.ratings.get_mut(&key) else {
            let _ = respond_to.send(Err(CatalogError::RatingNotFound { food_id, user_id }));
            return;
        };
        rating.reply = Some(reply);
        rating.modified_at = Utc::now();
        let _ = respond_to.send(Ok(()));
    }

    /// Full O(n) recompute over the food's ratings: mean and count.
    fn recompute_rating(&mut self, food_id: &str) {
        let (sum, count) = self
            .ratings
            .values()
            .filter(|r| r.food_id == food_id)
            .fold((0u32, 0u32), |(sum, count), r| (sum + u32::from(r.rating), count + 1));
        if let Some(food) = self.foods.get_mut(food_id) {
            food.rating_count = count;
            food.rating = if count == 0 {
                Decimal::ZERO
            } else {
                round_money(Decimal::from(sum) / Decimal::from(count))
            };
            debug!(food_id = %food_id, rating = %food.rating, count = count, "Rating recomputed");
        }
    }

    /// Batch conditioned decrement. Every line is checked against current
    /// stock before any line is decremented, so a failing batch leaves every
    /// food untouched and concurrent checkouts can never oversell.
    #[instrument(skip(self, lines, respond_to))]
    fn handle_reserve_stock(
        &mut self,
        lines: Vec<StockRequest>,
        respond_to: ServiceResponse<(), CatalogError>,
    ) {
        for line in &lines {
            let Some(food) = self.foods.get(&line.food_id) else {
                let _ = respond_to.send(Err(CatalogError::NotFound(line.food_id.clone())));
                return;
            };
            if food.stock < line.quantity {
                warn!(food = %food.name, requested = line.quantity, available = food.stock,
                    "Stock reservation refused");
                let _ = respond_to.send(Err(CatalogError::InsufficientStock {
                    food: food.name.clone(),
                    requested: line.quantity,
                    available: food.stock,
                }));
                return;
            }
        }
        for line in &lines {
            if let Some(food) = self.foods.get_mut(&line.food_id) {
                food.stock -= line.quantity;
            }
        }
        info!(lines = lines.len(), "Stock reserved");
        let _ = respond_to.send(Ok(()));
    }

    /// Compensating increment for a checkout that failed after reservation.
    #[instrument(skip(self, lines, respond_to))]
    fn handle_release_stock(
        &mut self,
        lines: Vec<StockRequest>,
        respond_to: ServiceResponse<(), CatalogError>,
    ) {
        for line in &lines {
            if let Some(food) = self.foods.get_mut(&line.food_id) {
                food.stock += line.quantity;
            }
        }
        info!(lines = lines.len(), "Stock released");
        let _ = respond_to.send(Ok(()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FoodSort;
    use rust_decimal_macros::dec;

    fn food(name: &str, price: u32, stock: u32) -> FoodCreate {
        FoodCreate {
            name: name.to_string(),
            description: format!("{name} description"),
            category: FoodCategory::Kebab,
            price,
            stock,
            preparation_minutes: 30,
            created_by: "user_1".to_string(),
        }
    }

    #[tokio::test]
    async fn batch_reservation_is_all_or_nothing() {
        let (service, client) = CatalogService::new(16);
        tokio::spawn(service.run());

        let koobideh = client.create_food(food("Koobideh", 20, 10)).await.unwrap();
        let joojeh = client.create_food(food("Joojeh", 15, 2)).await.unwrap();

        let err = client
            .reserve_stock(vec![
                StockRequest { food_id: koobideh.clone(), quantity: 4 },
                StockRequest { food_id: joojeh.clone(), quantity: 3 },
            ])
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::InsufficientStock {
                food: "Joojeh".to_string(),
                requested: 3,
                available: 2,
            }
        );

        // The passing line must not have been decremented.
        assert_eq!(client.get_food(koobideh.clone()).await.unwrap().unwrap().stock, 10);
        assert_eq!(client.get_food(joojeh.clone()).await.unwrap().unwrap().stock, 2);

        client
            .reserve_stock(vec![
                StockRequest { food_id: koobideh.clone(), quantity: 4 },
                StockRequest { food_id: joojeh.clone(), quantity: 2 },
            ])
            .await
            .unwrap();
        assert_eq!(client.get_food(koobideh).await.unwrap().unwrap().stock, 6);
        assert_eq!(client.get_food(joojeh).await.unwrap().unwrap().stock, 0);
    }

    #[tokio::test]
    async fn rating_aggregate_tracks_mean_and_count() {
        let (service, client) = CatalogService::new(16);
        tokio::spawn(service.run());

        let id = client.create_food(food("Ghormeh", 25, 5)).await.unwrap();

        client
            .submit_rating(id.clone(), "user_1".to_string(), 4, None)
            .await
            .unwrap();
        client
            .submit_rating(id.clone(), "user_2".to_string(), 5, Some("Great".to_string()))
            .await
            .unwrap();

        let f = client.get_food(id.clone()).await.unwrap().unwrap();
        assert_eq!(f.rating, dec!(4.50));
        assert_eq!(f.rating_count, 2);

        // Second create-only rating by the same user is a duplicate.
        let err = client
            .submit_rating(id.clone(), "user_1".to_string(), 2, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateRating { .. }));

        // Revising updates in place and recomputes the mean.
        client
            .revise_rating(id.clone(), "user_1".to_string(), 2, None)
            .await
            .unwrap();
        let f = client.get_food(id).await.unwrap().unwrap();
        assert_eq!(f.rating, dec!(3.50));
        assert_eq!(f.rating_count, 2);
    }

    #[tokio::test]
    async fn replies_attach_to_existing_ratings() {
        let (service, client) = CatalogService::new(16);
        tokio::spawn(service.run());

        let id = client.create_food(food("Ghormeh", 25, 5)).await.unwrap();
        client
            .submit_rating(id.clone(), "user_1".to_string(), 4, Some("Good".to_string()))
            .await
            .unwrap();

        // No rating by user_2 exists to reply to.
        let err = client
            .reply_to_rating(id.clone(), "user_2".to_string(), "Thanks".to_string())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::RatingNotFound { food_id: id.clone(), user_id: "user_2".to_string() }
        );

        client
            .reply_to_rating(id.clone(), "user_1".to_string(), "Thanks".to_string())
            .await
            .unwrap();
        let ratings = client.list_ratings(id).await.unwrap();
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].reply.as_deref(), Some("Thanks"));
    }

    #[tokio::test]
    async fn deleting_a_food_drops_its_ratings() {
        let (service, client) = CatalogService::new(16);
        tokio::spawn(service.run());

        let koobideh = client.create_food(food("Koobideh", 20, 10)).await.unwrap();
        let joojeh = client.create_food(food("Joojeh", 15, 10)).await.unwrap();
        client
            .submit_rating(koobideh.clone(), "user_1".to_string(), 5, None)
            .await
            .unwrap();
        client
            .submit_rating(joojeh.clone(), "user_1".to_string(), 3, None)
            .await
            .unwrap();

        let err = client.delete_food("food_99".to_string()).await.unwrap_err();
        assert_eq!(err, CatalogError::NotFound("food_99".to_string()));

        client.delete_food(koobideh.clone()).await.unwrap();
        assert!(client.get_food(koobideh.clone()).await.unwrap().is_none());
        assert!(client.list_ratings(koobideh).await.unwrap().is_empty());

        // The other food's ledger entries survive.
        let kept = client.list_ratings(joojeh).await.unwrap();
        assert_eq!(kept.len(), 1);
    }

    #[tokio::test]
    async fn listing_filters_by_category_and_sorts_by_price() {
        let (service, client) = CatalogService::new(16);
        tokio::spawn(service.run());

        client.create_food(food("Koobideh", 20, 10)).await.unwrap();
        client.create_food(food("Joojeh", 15, 10)).await.unwrap();
        let mut pizza = food("Margherita", 30, 10);
        pizza.category = FoodCategory::Pizza;
        client.create_food(pizza).await.unwrap();

        let kebabs = client
            .list_foods(Some(FoodCategory::Kebab), FoodSort::PriceAsc)
            .await
            .unwrap();
        assert_eq!(
            kebabs.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            vec!["Joojeh", "Koobideh"]
        );

        let all = client.list_foods(None, FoodSort::PriceDesc).await.unwrap();
        assert_eq!(all.first().unwrap().name, "Margherita");
    }
}
