use std::rc::Rc;

use crate::api::{ApiClient, ApiError, Property};

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn properties(&self) -> Result<Vec<Property>, ApiError> {
        self.client.list_properties().await
    }
}
