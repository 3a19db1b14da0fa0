//! Relay client - The wizard's single outbound call to the relay endpoint

use async_trait::async_trait;
use reqwest::Client;

use crate::application::dto::{RelayErrorBody, RelaySuccessBody};
use crate::application::ports::outbound::{RelayPort, RelayReceipt, RelaySubmitError};
use crate::domain::value_objects::SubmissionPayload;

/// Path the relay endpoint is mounted on
pub const APPLY_PATH: &str = "/api/apply";

/// Client for the relay endpoint
pub struct HttpRelayClient {
    client: Client,
    base_url: String,
}

impl HttpRelayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RelayPort for HttpRelayClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<RelayReceipt, RelaySubmitError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, APPLY_PATH))
            .json(payload)
            .send()
            .await
            .map_err(|e| RelaySubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Fall back to the status when the body is not the usual error shape
            let message = response
                .json::<RelayErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("Server Error: {}", status.as_u16()));
            return Err(RelaySubmitError::Rejected(message));
        }

        let body: RelaySuccessBody = response
            .json()
            .await
            .map_err(|e| RelaySubmitError::Transport(format!("Malformed relay response: {}", e)))?;
        Ok(RelayReceipt { id: body.id })
    }
}
