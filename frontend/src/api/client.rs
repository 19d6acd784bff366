use reqwest::{Client, StatusCode};

use crate::{api::types::*, config, utils::storage};

/// Thin wrapper over the REST backend. The bearer token is read fresh from
/// storage on every resource request, so a logout invalidates in-flight
/// clients without any shared mutable state.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn get_auth_headers(&self) -> Result<reqwest::header::HeaderMap, ApiError> {
        let mut headers = reqwest::header::HeaderMap::new();

        let token = storage::get_item(storage::TOKEN_KEY)
            .map_err(|err| ApiError::request_failed(err.to_string()))?
            .ok_or_else(|| ApiError::request_failed("No token"))?;

        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::request_failed("Invalid token format"))?,
        );

        Ok(headers)
    }

    /// Exchanges a decoded Google profile for the backend user record. This
    /// is the one call made without a bearer token; it happens before a
    /// session exists. Only an exact 200 establishes a session; any other
    /// status rejects the login.
    pub async fn upsert_user(
        &self,
        request: &UserUpsertRequest,
    ) -> Result<UserUpsertResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .post(&format!("{}/users", base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::OK {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(parse_error_body(response, status).await)
        }
    }

    pub async fn get_agents(&self) -> Result<Vec<Agent>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(&format!("{}/users", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(parse_error_body(response, status).await)
        }
    }

    pub async fn get_agent(&self, id: &str) -> Result<Agent, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(&format!("{}/users/{}", base_url, id))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(parse_error_body(response, status).await)
        }
    }

    pub async fn list_properties(&self) -> Result<Vec<Property>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(&format!("{}/properties", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(parse_error_body(response, status).await)
        }
    }

    pub async fn get_property(&self, id: &str) -> Result<Property, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(&format!("{}/properties/{}", base_url, id))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(parse_error_body(response, status).await)
        }
    }

    pub async fn create_property(&self, payload: &PropertyPayload) -> Result<Property, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .post(&format!("{}/properties", base_url))
            .headers(headers)
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(parse_error_body(response, status).await)
        }
    }

    pub async fn update_property(
        &self,
        id: &str,
        payload: &PropertyPayload,
    ) -> Result<Property, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .patch(&format!("{}/properties/{}", base_url, id))
            .headers(headers)
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(parse_error_body(response, status).await)
        }
    }

    pub async fn delete_property(&self, id: &str) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .delete(&format!("{}/properties/{}", base_url, id))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(parse_error_body(response, status).await)
        }
    }
}

async fn parse_error_body(response: reqwest::Response, status: StatusCode) -> ApiError {
    match response.json::<ApiError>().await {
        Ok(error) => error,
        Err(_) => ApiError::unknown(format!("Request failed with status {}", status.as_u16())),
    }
}
