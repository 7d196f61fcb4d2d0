//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver. In tests we
//! often don't want to spin up a full `ResourceActor` just to test client
//! logic; instead the mock client sends messages to a channel we control, and
//! helpers like [`expect_get`] or [`expect_action`] assert on what arrives
//! and reply deterministically.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::DiscountClient;
    use crate::domain::Discount;
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn resolve_active_filters_expired_codes_client_side() {
        let (inner, mut receiver) = create_mock_client::<Discount>(10);
        let client = DiscountClient::new(inner);

        let now = Utc::now();
        let lookup = tokio::spawn(async move {
            client.resolve_active("SAVE10".to_string(), now).await
        });

        let (code, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(code, "SAVE10");
        responder
            .send(Ok(Some(Discount {
                code: "SAVE10".to_string(),
                percent: dec!(10),
                is_active: true,
                created_at: now - Duration::days(2),
                expires_at: now - Duration::days(1),
            })))
            .unwrap();

        // The code exists but is expired, so it resolves to nothing.
        let resolved = lookup.await.unwrap().unwrap();
        assert!(resolved.is_none());
    }
}
