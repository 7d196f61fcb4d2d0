use crate::address_actor::AddressError;
use crate::client_method;
use crate::domain::{Address, AddressPayload};
use crate::messages::AddressRequest;
use tokio::sync::mpsc;

/// Client for interacting with the Address actor.
#[derive(Clone)]
pub struct AddressClient {
    sender: mpsc::Sender<AddressRequest>,
}

impl AddressClient {
    pub fn new(sender: mpsc::Sender<AddressRequest>) -> Self {
        Self { sender }
    }
}

client_method!(AddressClient => fn add_address(customer_id: String, payload: AddressPayload) -> Address as AddressRequest::Add, Error = AddressError);
client_method!(AddressClient => fn get_address(customer_id: String, id: String) -> Option<Address> as AddressRequest::Get, Error = AddressError);
client_method!(AddressClient => fn list_addresses(customer_id: String) -> Vec<Address> as AddressRequest::List, Error = AddressError);
client_method!(AddressClient => fn delete_address(customer_id: String, id: String) -> () as AddressRequest::Delete, Error = AddressError);
client_method!(AddressClient => fn set_default(customer_id: String, id: String) -> () as AddressRequest::SetDefault, Error = AddressError);
