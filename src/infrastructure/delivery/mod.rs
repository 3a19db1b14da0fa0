//! Delivery backends - HTTP adapters for the services that notify officers
//!
//! Each adapter implements [`DeliveryPort`] (or [`SubmissionLogPort`]) over a
//! shared reqwest client. The backend is chosen once, at startup, from
//! [`DeliveryBackendConfig`].

mod discord;
mod formspree;
mod resend;
mod sheets;

use std::sync::Arc;

use reqwest::{Client, Response};

pub use discord::ChatWebhookBackend;
pub use formspree::FormRelayBackend;
pub use resend::EmailBackend;
pub use sheets::SheetLogger;

use crate::application::ports::outbound::{DeliveryError, DeliveryPort, SubmissionLogPort};
use crate::infrastructure::config::DeliveryBackendConfig;

impl From<reqwest::Error> for DeliveryError {
    fn from(e: reqwest::Error) -> Self {
        DeliveryError::Transport(e.to_string())
    }
}

/// Turn a non-success response into a rejection carrying the raw body
async fn rejection(response: Response) -> DeliveryError {
    let status = response.status().as_u16();
    let detail = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
    DeliveryError::Rejected { status, detail }
}

/// Build the primary backend, plus the submission log when the variant has one
pub fn create_delivery_backend(
    client: Client,
    config: &DeliveryBackendConfig,
) -> (Arc<dyn DeliveryPort>, Option<Arc<dyn SubmissionLogPort>>) {
    let delivery: Arc<dyn DeliveryPort> = match config {
        DeliveryBackendConfig::ChatWebhook { webhook_url } => {
            Arc::new(ChatWebhookBackend::new(client.clone(), webhook_url))
        }
        DeliveryBackendConfig::FormRelay { endpoint } => {
            Arc::new(FormRelayBackend::new(client.clone(), endpoint))
        }
        DeliveryBackendConfig::Email(email)
        | DeliveryBackendConfig::EmailWithSheetLog { email, .. } => {
            Arc::new(EmailBackend::new(client.clone(), email.clone()))
        }
    };

    let submission_log: Option<Arc<dyn SubmissionLogPort>> = match config {
        DeliveryBackendConfig::EmailWithSheetLog { sheet_url: Some(url), .. } => {
            Some(Arc::new(SheetLogger::new(client, url)))
        }
        DeliveryBackendConfig::EmailWithSheetLog { sheet_url: None, .. } => {
            tracing::warn!("GOOGLE_SHEETS_URL not set, submissions will not be logged to the sheet");
            None
        }
        _ => None,
    };

    (delivery, submission_log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::EmailConfig;

    fn email() -> EmailConfig {
        EmailConfig {
            api_key: "re_test".to_string(),
            api_base_url: "https://api.resend.com".to_string(),
            from: "Guild <noreply@guild.test>".to_string(),
            to: "officers@guild.test".to_string(),
        }
    }

    #[test]
    fn test_factory_selects_backend() {
        let (backend, log) = create_delivery_backend(
            Client::new(),
            &DeliveryBackendConfig::ChatWebhook {
                webhook_url: "https://discord.test/hook".to_string(),
            },
        );
        assert_eq!(backend.backend_name(), "Discord");
        assert!(log.is_none());

        let (backend, log) = create_delivery_backend(
            Client::new(),
            &DeliveryBackendConfig::EmailWithSheetLog {
                email: email(),
                sheet_url: Some("https://script.test/exec".to_string()),
            },
        );
        assert_eq!(backend.backend_name(), "Resend");
        assert_eq!(log.map(|l| l.log_name()), Some("Google Sheets"));
    }

    #[test]
    fn test_sheet_log_skipped_without_url() {
        let (_, log) = create_delivery_backend(
            Client::new(),
            &DeliveryBackendConfig::EmailWithSheetLog { email: email(), sheet_url: None },
        );
        assert!(log.is_none());
    }
}
