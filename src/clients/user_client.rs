use crate::actor_framework::ResourceClient;
use crate::domain::{User, UserCreate, UserPatch};
use crate::impl_basic_client;
use crate::user_actor::UserError;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<String, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(UserError::from_framework)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: String, patch: UserPatch) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(UserError::from_framework)
    }
}
