//! Chat webhook backend (Discord)

use async_trait::async_trait;
use reqwest::Client;

use super::rejection;
use crate::application::ports::outbound::{DeliveryError, DeliveryPort, DeliveryReceipt};
use crate::domain::value_objects::SubmissionPayload;

/// Forwards the payload unchanged to a chat webhook
pub struct ChatWebhookBackend {
    client: Client,
    webhook_url: String,
}

impl ChatWebhookBackend {
    pub fn new(client: Client, webhook_url: &str) -> Self {
        Self {
            client,
            webhook_url: webhook_url.to_string(),
        }
    }
}

#[async_trait]
impl DeliveryPort for ChatWebhookBackend {
    fn backend_name(&self) -> &'static str {
        "Discord"
    }

    async fn deliver(&self, payload: &SubmissionPayload) -> Result<DeliveryReceipt, DeliveryError> {
        let response = self.client.post(&self.webhook_url).json(payload).send().await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        // Webhooks answer 204 without a message id
        Ok(DeliveryReceipt::default())
    }
}
