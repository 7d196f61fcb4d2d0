use crate::actor_framework::ResourceClient;
use crate::domain::{Employee, EmployeeCreate, EmployeePatch};
use crate::employee_actor::EmployeeError;
use crate::impl_basic_client;
use tracing::{debug, instrument};

/// Client for interacting with the Employee actor.
#[derive(Clone)]
pub struct EmployeeClient {
    inner: ResourceClient<Employee>,
}

impl_basic_client!(EmployeeClient, Employee, EmployeeError, employee);

impl EmployeeClient {
    #[instrument(skip(self))]
    pub async fn create_employee(&self, params: EmployeeCreate) -> Result<String, EmployeeError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(EmployeeError::from_framework)
    }

    #[instrument(skip(self))]
    pub async fn update_employee(
        &self,
        id: String,
        patch: EmployeePatch,
    ) -> Result<Employee, EmployeeError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(EmployeeError::from_framework)
    }
}
