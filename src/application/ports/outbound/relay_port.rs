//! Relay port - How the wizard hands a finished application to the relay

use async_trait::async_trait;

use crate::domain::value_objects::SubmissionPayload;

/// Successful relay answer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayReceipt {
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelaySubmitError {
    /// The relay answered with an error status; the message is shown to the user
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Transport(String),
}

#[async_trait]
pub trait RelayPort: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<RelayReceipt, RelaySubmitError>;
}
