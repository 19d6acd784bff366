use std::rc::Rc;

use leptos::*;

use crate::api::{Agent, ApiClient, ApiError};

#[derive(Clone)]
pub struct AgentsRepository {
    client: Rc<ApiClient>,
}

impl AgentsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Agent>, ApiError> {
        self.client.get_agents().await
    }

    pub async fn get(&self, id: &str) -> Result<Agent, ApiError> {
        self.client.get_agent(id).await
    }
}

pub fn use_agents_repository() -> AgentsRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    AgentsRepository::new_with_client(Rc::new(api))
}
