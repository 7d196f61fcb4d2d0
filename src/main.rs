mod actor_framework;
mod app_system;
mod clients;
mod domain;
mod messages;

mod address_actor;
mod cart_actor;
mod catalog_actor;
mod discount_actor;
mod employee_actor;
mod order_actor;
mod user_actor;

#[cfg(test)]
mod mock_framework;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, OrderSystem};
use crate::domain::{
    AddressPayload, AddressSelection, DiscountCreate, FoodCategory, FoodCreate, Role, UserCreate,
};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting food ordering system");

    let system = OrderSystem::new();

    let manager_id = system
        .user_client
        .create_user(UserCreate {
            username: "mina".to_string(),
            first_name: "Mina".to_string(),
            last_name: "Karimi".to_string(),
            role: Some(Role::Manager),
        })
        .await
        .map_err(|e| e.to_string())?;

    let customer_id = async {
        info!("Creating test customer");
        system
            .user_client
            .create_user(UserCreate {
                username: "alice".to_string(),
                first_name: "Alice".to_string(),
                last_name: "Moradi".to_string(),
                role: None,
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(tracing::info_span!("customer_creation"))
    .await?;

    info!(customer_id = %customer_id, "Customer created");

    // Seed the menu.
    let koobideh = system
        .catalog_client
        .create_food(FoodCreate {
            name: "Koobideh".to_string(),
            description: "Minced lamb kebab with grilled tomato".to_string(),
            category: FoodCategory::Kebab,
            price: 20,
            stock: 10,
            preparation_minutes: 25,
            created_by: manager_id.clone(),
        })
        .await
        .map_err(|e| e.to_string())?;

    system
        .catalog_client
        .submit_rating(koobideh.clone(), customer_id.clone(), 5, Some("Perfect".to_string()))
        .await
        .map_err(|e| e.to_string())?;

    system
        .discount_client
        .create_discount(DiscountCreate {
            code: "SAVE10".to_string(),
            percent: Decimal::from(10),
            expires_at: Utc::now() + Duration::days(7),
        })
        .await
        .map_err(|e| e.to_string())?;

    system
        .cart_client
        .add_to_cart(customer_id.clone(), koobideh, 5)
        .await
        .map_err(|e| e.to_string())?;

    let order_result = async {
        info!("Checking out");
        system
            .order_client
            .checkout(
                customer_id.clone(),
                Some("SAVE10".to_string()),
                AddressSelection::New(AddressPayload {
                    title: "Domicile".to_string(),
                    address: "Valiasr12Avenue".to_string(),
                    city: "Tehran".to_string(),
                    postal_code: "1234567890".to_string(),
                }),
            )
            .await
    }
    .instrument(tracing::info_span!("order_processing"))
    .await;

    match order_result {
        Ok(order) => {
            info!(order_id = %order.id, total = %order.total_price, "Order placed");
            let completed = system
                .order_client
                .complete_order(order.id)
                .await
                .map_err(|e| e.to_string())?;
            info!(completed = completed, "Order fulfilled");
        }
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
