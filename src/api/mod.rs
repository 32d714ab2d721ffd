use serde::{Deserialize, Serialize};

pub(crate) mod client;
pub mod error;
pub mod error_handler;

pub use client::PortalApiClient;
pub use error::PortalApiError;
pub use error_handler::handle_api_error;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Outcome reported by the backend for a status-update run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdateResponse {
    pub success: bool,
    pub message: String,
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StatusUpdater: Send + Sync {
    /// Runs the automatic status update fired when the portal loads.
    async fn auto_status_update_on_load(&self) -> Result<StatusUpdateResponse, PortalApiError>;

    /// Runs a status update explicitly requested by the staff member.
    async fn manual_status_update(&self) -> Result<StatusUpdateResponse, PortalApiError>;
}
