use std::rc::Rc;

use leptos::*;

use crate::api::{ApiClient, ApiError, Property, PropertyPayload};

#[derive(Clone)]
pub struct PropertiesRepository {
    client: Rc<ApiClient>,
}

impl PropertiesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Property>, ApiError> {
        self.client.list_properties().await
    }

    pub async fn get(&self, id: &str) -> Result<Property, ApiError> {
        self.client.get_property(id).await
    }

    pub async fn create(&self, payload: &PropertyPayload) -> Result<Property, ApiError> {
        self.client.create_property(payload).await
    }

    pub async fn update(&self, id: &str, payload: &PropertyPayload) -> Result<Property, ApiError> {
        self.client.update_property(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_property(id).await
    }
}

pub fn use_properties_repository() -> PropertiesRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    PropertiesRepository::new_with_client(Rc::new(api))
}
