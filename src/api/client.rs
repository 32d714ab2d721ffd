//! Portal API Client
//!
//! A client for the staff-portal backend, allowing status-update runs to be
//! triggered on load and on demand.

use crate::api::error::PortalApiError;
use crate::api::{StatusUpdateResponse, StatusUpdater};
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;

// User-Agent string with portal version
const USER_AGENT: &str = concat!("staff-portal/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct PortalApiClient {
    client: Client,
    environment: Environment,
}

impl PortalApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .user_agent(USER_AGENT)
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.portal_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, PortalApiError> {
        if !response.status().is_success() {
            return Err(PortalApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn post_status_update(
        &self,
        endpoint: &str,
    ) -> Result<StatusUpdateResponse, PortalApiError> {
        let url = self.build_url(endpoint);
        let response = self.client.post(&url).send().await?;
        let response = Self::handle_response_status(response).await?;

        let bytes = response.bytes().await?;
        let update: StatusUpdateResponse = serde_json::from_slice(&bytes)?;
        Ok(update)
    }
}

#[async_trait::async_trait]
impl StatusUpdater for PortalApiClient {
    async fn auto_status_update_on_load(
        &self,
    ) -> Result<StatusUpdateResponse, PortalApiError> {
        self.post_status_update("status-update/auto").await
    }

    async fn manual_status_update(&self) -> Result<StatusUpdateResponse, PortalApiError> {
        self.post_status_update("status-update/manual").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_without_duplicate_slashes() {
        let client = PortalApiClient::new(Environment::Local);
        assert_eq!(
            client.build_url("/status-update/manual"),
            "http://localhost:8787/status-update/manual"
        );
        assert_eq!(
            client.build_url("status-update/auto"),
            "http://localhost:8787/status-update/auto"
        );
    }
}
