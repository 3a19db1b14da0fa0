//! Transactional email backend (Resend)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::rejection;
use crate::application::ports::outbound::{DeliveryError, DeliveryPort, DeliveryReceipt};
use crate::domain::value_objects::SubmissionPayload;
use crate::infrastructure::config::EmailConfig;

const FALLBACK_SUBJECT: &str = "New Application";

/// Sends the payload as an HTML email to the officers' mailbox
pub struct EmailBackend {
    client: Client,
    config: EmailConfig,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: String,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl EmailBackend {
    pub fn new(client: Client, config: EmailConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl DeliveryPort for EmailBackend {
    fn backend_name(&self) -> &'static str {
        "Resend"
    }

    async fn deliver(&self, payload: &SubmissionPayload) -> Result<DeliveryReceipt, DeliveryError> {
        let request = SendEmailRequest {
            from: self.config.from.as_str(),
            to: [self.config.to.as_str()],
            subject: payload.subject().unwrap_or(FALLBACK_SUBJECT),
            html: payload.render_email_html(),
        };

        let response = self
            .client
            .post(format!("{}/emails", self.config.api_base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        // The email is out once the status is 2xx; the id is informational
        let id = response
            .json::<SendEmailResponse>()
            .await
            .ok()
            .map(|sent| sent.id);
        Ok(DeliveryReceipt { id })
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;

    fn backend(base: String) -> EmailBackend {
        EmailBackend::new(
            Client::new(),
            EmailConfig {
                api_key: "re_test".to_string(),
                api_base_url: base,
                from: "Guild <noreply@guild.test>".to_string(),
                to: "officers@guild.test".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_sends_html_email() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/emails")
            .match_header("authorization", "Bearer re_test")
            .match_body(Matcher::Json(json!({
                "from": "Guild <noreply@guild.test>",
                "to": ["officers@guild.test"],
                "subject": "New Application: Aldric",
                "html": "<strong>Character Name:</strong> Aldric"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"}"#)
            .create_async()
            .await;

        let payload = SubmissionPayload::new()
            .with_field("_subject", "New Application: Aldric")
            .with_field("Character Name", "Aldric");
        let receipt = backend(server.url()).deliver(&payload).await.unwrap();

        assert_eq!(receipt.id.as_deref(), Some("49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_subject_uses_fallback() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/emails")
            .match_body(Matcher::PartialJson(json!({ "subject": FALLBACK_SUBJECT })))
            .with_status(200)
            .with_body(r#"{"id": "abc"}"#)
            .create_async()
            .await;

        let payload = SubmissionPayload::new().with_field("Character Name", "Aldric");
        assert!(backend(server.url()).deliver(&payload).await.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejected_key() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/emails")
            .with_status(401)
            .with_body(r#"{"statusCode": 401, "name": "missing_api_key"}"#)
            .create_async()
            .await;

        match backend(server.url()).deliver(&SubmissionPayload::new()).await {
            Err(DeliveryError::Rejected { status, detail }) => {
                assert_eq!(status, 401);
                assert!(detail.contains("missing_api_key"));
            }
            other => panic!("Expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_accepted_without_id_still_succeeds() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/emails")
            .with_status(202)
            .create_async()
            .await;

        let receipt = backend(server.url())
            .deliver(&SubmissionPayload::new())
            .await
            .unwrap();

        assert_eq!(receipt, DeliveryReceipt { id: None });
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unexpected_success_body_is_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/emails")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let receipt = backend(server.url()).deliver(&SubmissionPayload::new()).await;
        assert_eq!(receipt, Ok(DeliveryReceipt::default()));
    }
}
