//! Delivery ports - Contracts for the services that actually notify officers

use async_trait::async_trait;

use crate::domain::value_objects::SubmissionPayload;

/// What a backend hands back after accepting a submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Provider identifier for the delivered message, when it returns one
    pub id: Option<String>,
}

impl DeliveryReceipt {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// The provider answered with a non-success status
    #[error("Backend rejected submission with status {status}: {detail}")]
    Rejected { status: u16, detail: String },
    /// The provider could not be reached or its answer could not be read
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Primary delivery backend: exactly one is configured per deployment
#[async_trait]
pub trait DeliveryPort: Send + Sync {
    /// Short provider name used in logs and client-facing error messages
    fn backend_name(&self) -> &'static str;

    async fn deliver(&self, payload: &SubmissionPayload) -> Result<DeliveryReceipt, DeliveryError>;
}

/// Best-effort secondary record of delivered submissions
#[async_trait]
pub trait SubmissionLogPort: Send + Sync {
    fn log_name(&self) -> &'static str;

    async fn log(&self, payload: &SubmissionPayload) -> Result<(), DeliveryError>;
}
