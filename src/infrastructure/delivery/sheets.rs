//! Spreadsheet submission log (Google Apps Script web app)

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use reqwest::Client;

use super::rejection;
use crate::application::ports::outbound::{DeliveryError, SubmissionLogPort};
use crate::domain::value_objects::SubmissionPayload;

/// Appends each delivered submission as a spreadsheet row
pub struct SheetLogger {
    client: Client,
    url: String,
}

impl SheetLogger {
    pub fn new(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl SubmissionLogPort for SheetLogger {
    fn log_name(&self) -> &'static str {
        "Google Sheets"
    }

    async fn log(&self, payload: &SubmissionPayload) -> Result<(), DeliveryError> {
        let row = payload
            .clone()
            .with_field("Submitted At", Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));

        let response = self.client.post(&self.url).json(&row).send().await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_logs_payload_with_timestamp() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/macros/s/abc/exec")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(json!({ "Character Name": "Aldric" })),
                Matcher::Regex(r#""Submitted At":"\d{4}-\d{2}-\d{2}T"#.to_string()),
            ]))
            .with_status(200)
            .create_async()
            .await;

        let logger = SheetLogger::new(Client::new(), &format!("{}/macros/s/abc/exec", server.url()));
        let payload = SubmissionPayload::new().with_field("Character Name", "Aldric");
        logger.log(&payload).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_failure_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("POST", "/exec").with_status(503).create_async().await;

        let logger = SheetLogger::new(Client::new(), &format!("{}/exec", server.url()));
        assert!(matches!(
            logger.log(&SubmissionPayload::new()).await,
            Err(DeliveryError::Rejected { status: 503, .. })
        ));
    }
}
