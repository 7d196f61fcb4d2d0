use crate::actor_framework::Entity;
use crate::domain::{Role, User, UserCreate, UserPatch};

impl Entity for User {
    type Id = String;
    type CreateParams = UserCreate;
    type Patch = UserPatch;
    type Action = ();
    type ActionResult = ();

    /// New accounts default to the customer role unless one is given.
    fn from_create_params(id: String, params: UserCreate) -> Result<Self, String> {
        if params.username.trim().is_empty() {
            return Err("Username must not be empty.".to_string());
        }
        Ok(Self {
            id,
            username: params.username,
            first_name: params.first_name,
            last_name: params.last_name,
            role: params.role.unwrap_or(Role::Customer),
        })
    }

    fn on_update(&mut self, patch: UserPatch) -> Result<(), String> {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
