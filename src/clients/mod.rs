//! Typed clients for every actor in the system.

pub mod macros;

pub mod address_client;
pub mod cart_client;
pub mod catalog_client;
pub mod discount_client;
pub mod employee_client;
pub mod order_client;
pub mod user_client;

pub use address_client::AddressClient;
pub use cart_client::CartClient;
pub use catalog_client::CatalogClient;
pub use discount_client::DiscountClient;
pub use employee_client::EmployeeClient;
pub use order_client::OrderClient;
pub use user_client::UserClient;

/// Generate a client method that wraps the oneshot-channel boilerplate for a
/// request-enum variant, with automatic tracing. Parameter names must match
/// the variant's field names.
#[macro_export]
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($crate::messages::$request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}
