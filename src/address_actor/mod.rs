//! The address actor owns every customer's address book and enforces the
//! single-default invariant: promoting one address demotes all the others of
//! that customer inside the same handler invocation.

pub mod error;

pub use error::*;

use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{info, instrument};

use crate::clients::AddressClient;
use crate::domain::{Address, AddressPayload};
use crate::messages::{AddressRequest, ServiceResponse};

pub struct AddressService {
    receiver: mpsc::Receiver<AddressRequest>,
    addresses: HashMap<String, Address>,
    next_address_id: u64,
}

impl AddressService {
    pub fn new(buffer_size: usize) -> (Self, AddressClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            addresses: HashMap::new(),
            next_address_id: 1,
        };
        (service, AddressClient::new(sender))
    }

    #[instrument(name = "address_service", skip(self))]
    pub async fn run(mut self) {
        info!("AddressService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                AddressRequest::Add { customer_id, payload, respond_to } => {
                    self.handle_add(customer_id, payload, respond_to);
                }
                AddressRequest::Get { customer_id, id, respond_to } => {
                    let address = self
                        .addresses
                        .get(&id)
                        .filter(|a| a.customer_id == customer_id)
                        .cloned();
                    let _ = respond_to.send(Ok(address));
                }
                AddressRequest::List { customer_id, respond_to } => {
                    let mut addresses: Vec<Address> = self
                        .addresses
                        .values()
                        .filter(|a| a.customer_id == customer_id)
                        .cloned()
                        .collect();
                    addresses.sort_by(|a, b| a.id.cmp(&b.id));
                    let _ = respond_to.send(Ok(addresses));
                }
                AddressRequest::Delete { customer_id, id, respond_to } => {
                    self.handle_delete(customer_id, id, respond_to);
                }
                AddressRequest::SetDefault { customer_id, id, respond_to } => {
                    self.handle_set_default(customer_id, id, respond_to);
                }
            }
        }
        info!("AddressService stopped");
    }

    #[instrument(fields(customer_id = %customer_id), skip(self, payload, respond_to))]
    fn handle_add(
        &mut self,
        customer_id: String,
        payload: AddressPayload,
        respond_to: ServiceResponse<Address, AddressError>,
    ) {
        if let Err(reason) = payload.validate() {
            let _ = respond_to.send(Err(AddressError::Invalid(reason)));
            return;
        }
        let id = format!("address_{}", self.next_address_id);
        self.next_address_id += 1;
        let address = Address {
            id: id.clone(),
            customer_id,
            title: payload.title,
            address: payload.address,
            city: payload.city,
            postal_code: payload.postal_code,
            is_default: false,
        };
        self.addresses.insert(id.clone(), address.clone());
        info!(address_id = %id, "Address added");
        let _ = respond_to.send(Ok(address));
    }

    #[instrument(fields(customer_id = %customer_id, address_id = %id), skip(self, respond_to))]
    fn handle_delete(
        &mut self,
        customer_id: String,
        id: String,
        respond_to: ServiceResponse<(), AddressError>,
    ) {
        let owned = self
            .addresses
            .get(&id)
            .map_or(false, |a| a.customer_id == customer_id);
        if !owned {
            let _ = respond_to.send(Err(AddressError::NotFound(id)));
            return;
        }
        self.addresses.remove(&id);
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(customer_id = %customer_id, address_id = %id), skip(self, respond_to))]
    fn handle_set_default(
        &mut self,
        customer_id: String,
        id: String,
        respond_to: ServiceResponse<(), AddressError>,
    ) {
        let owned = self
            .addresses
            .get(&id)
            .map_or(false, |a| a.customer_id == customer_id);
        if !owned {
            let _ = respond_to.send(Err(AddressError::NotFound(id)));
            return;
        }
        for address in self.addresses.values_mut() {
            if address.customer_id == customer_id {
                address.is_default = address.id == id;
            }
        }
        let _ = respond_to.send(Ok(()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str) -> AddressPayload {
        AddressPayload {
            title: title.to_string(),
            address: "Valiasr12Avenue".to_string(),
            city: "Tehran".to_string(),
            postal_code: "1234567890".to_string(),
        }
    }

    #[tokio::test]
    async fn exactly_one_default_after_promotion() {
        let (service, client) = AddressService::new(16);
        tokio::spawn(service.run());

        let a = client.add_address("user_1".to_string(), payload("Domicile")).await.unwrap();
        let b = client.add_address("user_1".to_string(), payload("Bureau")).await.unwrap();

        client.set_default("user_1".to_string(), a.id.clone()).await.unwrap();
        client.set_default("user_1".to_string(), b.id.clone()).await.unwrap();

        let addresses = client.list_addresses("user_1".to_string()).await.unwrap();
        let defaults: Vec<&Address> = addresses.iter().filter(|a| a.is_default).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].id, b.id);
    }

    #[tokio::test]
    async fn invalid_payloads_are_rejected_with_the_failing_rule() {
        let (service, client) = AddressService::new(16);
        tokio::spawn(service.run());

        let err = client
            .add_address("user_1".to_string(), payload("Home"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AddressError::Invalid("Title must be at least 5 characters long.".to_string())
        );
    }

    #[tokio::test]
    async fn deletion_respects_ownership() {
        let (service, client) = AddressService::new(16);
        tokio::spawn(service.run());

        let a = client.add_address("user_1".to_string(), payload("Domicile")).await.unwrap();

        let err = client
            .delete_address("user_2".to_string(), a.id.clone())
            .await
            .unwrap_err();
        assert_eq!(err, AddressError::NotFound(a.id.clone()));

        client.delete_address("user_1".to_string(), a.id).await.unwrap();
        assert!(client
            .list_addresses("user_1".to_string())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn addresses_are_scoped_to_their_owner() {
        let (service, client) = AddressService::new(16);
        tokio::spawn(service.run());

        let a = client.add_address("user_1".to_string(), payload("Domicile")).await.unwrap();

        assert!(client
            .get_address("user_2".to_string(), a.id.clone())
            .await
            .unwrap()
            .is_none());
        let err = client
            .set_default("user_2".to_string(), a.id.clone())
            .await
            .unwrap_err();
        assert_eq!(err, AddressError::NotFound(a.id));
    }
}
