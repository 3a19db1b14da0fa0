//! Form relay backend (Formspree)

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;

use super::rejection;
use crate::application::ports::outbound::{DeliveryError, DeliveryPort, DeliveryReceipt};
use crate::domain::value_objects::SubmissionPayload;

/// Posts the payload to a hosted form endpoint, which emails it on
pub struct FormRelayBackend {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct FormRelayResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    next: Option<String>,
}

impl FormRelayBackend {
    pub fn new(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl DeliveryPort for FormRelayBackend {
    fn backend_name(&self) -> &'static str {
        "Formspree"
    }

    async fn deliver(&self, payload: &SubmissionPayload) -> Result<DeliveryReceipt, DeliveryError> {
        let response = self
            .client
            .post(&self.endpoint)
            // Without this the service answers with an HTML redirect page
            .header(header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        // The acknowledgement body is informational only
        let id = response
            .json::<FormRelayResponse>()
            .await
            .ok()
            .and_then(|body| body.id.or(body.next));
        Ok(DeliveryReceipt { id })
    }
}
