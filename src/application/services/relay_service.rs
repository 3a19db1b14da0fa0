//! Relay Service - Forwards a submission to the configured delivery backend
//!
//! The relay is stateless: each call delivers one payload to exactly one
//! primary backend and reports the outcome. When a submission log is attached
//! it runs as a detached task after the primary delivery succeeds; its result
//! is only logged and never joined into the relay's answer.

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn, Instrument};
use uuid::Uuid;

use crate::application::ports::outbound::{
    DeliveryError, DeliveryPort, RelayReceipt, SubmissionLogPort,
};
use crate::domain::value_objects::SubmissionPayload;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// Credentials or destination missing for this deployment; the reason is
    /// for server logs only
    #[error("Delivery backend is not configured: {0}")]
    Configuration(String),
    #[error("{backend} rejected the submission with status {status}")]
    Rejected { backend: &'static str, status: u16 },
    #[error("Could not reach {backend}")]
    Transport { backend: &'static str },
}

/// Relay core, polymorphic over the delivery backend chosen at deployment
pub struct RelayService {
    delivery: Result<Arc<dyn DeliveryPort>, String>,
    submission_log: Option<Arc<dyn SubmissionLogPort>>,
}

impl RelayService {
    pub fn new(delivery: Arc<dyn DeliveryPort>) -> Self {
        Self {
            delivery: Ok(delivery),
            submission_log: None,
        }
    }

    /// A relay that answers every submission with a configuration error
    pub fn unconfigured(reason: impl Into<String>) -> Self {
        Self {
            delivery: Err(reason.into()),
            submission_log: None,
        }
    }

    pub fn with_submission_log(mut self, log: Arc<dyn SubmissionLogPort>) -> Self {
        self.submission_log = Some(log);
        self
    }

    pub fn is_configured(&self) -> bool {
        self.delivery.is_ok()
    }

    pub fn backend_name(&self) -> Option<&'static str> {
        self.delivery.as_ref().ok().map(|d| d.backend_name())
    }

    /// Fail fast, before a request body is even read, when nothing can be delivered
    pub fn ensure_configured(&self) -> Result<&Arc<dyn DeliveryPort>, RelayError> {
        self.delivery.as_ref().map_err(|reason| {
            error!(reason = %reason, "Relay invoked without a configured delivery backend");
            RelayError::Configuration(reason.clone())
        })
    }

    /// Deliver one submission and map the backend outcome
    #[instrument(skip(self, payload), fields(submission_id = %Uuid::new_v4()))]
    pub async fn relay(&self, payload: SubmissionPayload) -> Result<RelayReceipt, RelayError> {
        let delivery = self.ensure_configured()?;
        let backend = delivery.backend_name();
        debug!(backend, field_count = payload.len(), "Forwarding submission");

        match delivery.deliver(&payload).await {
            Ok(receipt) => {
                info!(backend, id = ?receipt.id, "Submission delivered");
                self.spawn_submission_log(payload);
                Ok(RelayReceipt { id: receipt.id })
            }
            Err(DeliveryError::Rejected { status, detail }) => {
                error!(backend, status, detail = %detail, "Delivery backend rejected submission");
                Err(RelayError::Rejected { backend, status })
            }
            Err(DeliveryError::Transport(detail)) => {
                error!(backend, detail = %detail, "Delivery backend unreachable");
                Err(RelayError::Transport { backend })
            }
        }
    }

    /// Record the submission in the secondary log without waiting for it
    fn spawn_submission_log(&self, payload: SubmissionPayload) {
        let Some(log) = self.submission_log.clone() else {
            return;
        };
        let task = async move {
            match log.log(&payload).await {
                Ok(()) => debug!(log = log.log_name(), "Submission logged"),
                Err(e) => warn!(
                    log = log.log_name(),
                    error = %e,
                    "Submission log failed, primary delivery unaffected"
                ),
            }
        };
        tokio::spawn(task.instrument(tracing::Span::current()));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::mpsc;

    use super::*;
    use crate::application::ports::outbound::DeliveryReceipt;

    struct MockDelivery {
        outcome: Result<DeliveryReceipt, DeliveryError>,
    }

    #[async_trait]
    impl DeliveryPort for MockDelivery {
        fn backend_name(&self) -> &'static str {
            "Mock"
        }

        async fn deliver(&self, _payload: &SubmissionPayload) -> Result<DeliveryReceipt, DeliveryError> {
            self.outcome.clone()
        }
    }

    /// Reports each logged subject, optionally after a long stall
    struct MockLog {
        stall: Option<Duration>,
        fail: bool,
        seen: mpsc::UnboundedSender<String>,
    }

    #[async_trait]
    impl SubmissionLogPort for MockLog {
        fn log_name(&self) -> &'static str {
            "MockSheet"
        }

        async fn log(&self, payload: &SubmissionPayload) -> Result<(), DeliveryError> {
            if let Some(stall) = self.stall {
                tokio::time::sleep(stall).await;
            }
            let _ = self.seen.send(payload.subject().unwrap_or_default().to_string());
            if self.fail {
                Err(DeliveryError::Transport("operation timed out".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn payload() -> SubmissionPayload {
        SubmissionPayload::new()
            .with_field("_subject", "New Application: Aldric")
            .with_field("Character Name", "Aldric")
    }

    fn accepting(id: Option<&str>) -> Arc<dyn DeliveryPort> {
        Arc::new(MockDelivery {
            outcome: Ok(DeliveryReceipt { id: id.map(str::to_string) }),
        })
    }

    #[tokio::test]
    async fn test_unconfigured_relay_reports_configuration_error() {
        let service = RelayService::unconfigured("DISCORD_WEBHOOK_URL is not set");
        assert!(!service.is_configured());

        let result = service.relay(payload()).await;
        assert!(matches!(result, Err(RelayError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_accepted_submission_returns_backend_id() {
        let service = RelayService::new(accepting(Some("email_123")));
        let receipt = service.relay(payload()).await.unwrap();
        assert_eq!(receipt.id.as_deref(), Some("email_123"));
    }

    #[tokio::test]
    async fn test_rejection_keeps_status_but_not_detail() {
        let service = RelayService::new(Arc::new(MockDelivery {
            outcome: Err(DeliveryError::Rejected {
                status: 422,
                detail: "secret provider detail".to_string(),
            }),
        }));

        let err = service.relay(payload()).await.unwrap_err();
        assert_eq!(err, RelayError::Rejected { backend: "Mock", status: 422 });
        assert!(!err.to_string().contains("secret provider detail"));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let service = RelayService::new(Arc::new(MockDelivery {
            outcome: Err(DeliveryError::Transport("dns error".to_string())),
        }));
        assert_eq!(
            service.relay(payload()).await,
            Err(RelayError::Transport { backend: "Mock" })
        );
    }

    #[tokio::test]
    async fn test_stalled_submission_log_does_not_delay_relay() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let service = RelayService::new(accepting(Some("email_123"))).with_submission_log(Arc::new(MockLog {
            stall: Some(Duration::from_secs(600)),
            fail: true,
            seen: tx,
        }));

        let receipt = tokio::time::timeout(Duration::from_secs(5), service.relay(payload()))
            .await
            .expect("relay waited on the submission log")
            .unwrap();
        assert_eq!(receipt.id.as_deref(), Some("email_123"));
    }

    #[tokio::test]
    async fn test_failed_submission_log_is_swallowed() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let service = RelayService::new(accepting(None)).with_submission_log(Arc::new(MockLog {
            stall: None,
            fail: true,
            seen: tx,
        }));

        assert!(service.relay(payload()).await.is_ok());
        let logged = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap();
        assert_eq!(logged.as_deref(), Some("New Application: Aldric"));
    }

    #[tokio::test]
    async fn test_rejected_submission_is_not_logged() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let service = RelayService::new(Arc::new(MockDelivery {
            outcome: Err(DeliveryError::Rejected { status: 500, detail: String::new() }),
        }))
        .with_submission_log(Arc::new(MockLog { stall: None, fail: false, seen: tx }));

        assert!(service.relay(payload()).await.is_err());
        // The service (and its log sender) is dropped, so the channel closes empty
        drop(service);
        assert_eq!(rx.recv().await, None);
    }
}
