//! HTTP error mapping for the relay endpoint
//!
//! Every failure becomes a JSON `{"error": "..."}` body. Backend details and
//! configuration names stay in the server log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::RelayErrorBody;
use crate::application::services::RelayError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Malformed payload")]
    MalformedPayload,

    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            ApiError::MalformedPayload => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Relay(RelayError::Configuration(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error".to_string(),
            ),
            ApiError::Relay(RelayError::Rejected { backend, status }) => {
                // Pass the backend's error status through, anything else is ours
                let status = StatusCode::from_u16(*status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, format!("Failed to send to {}", backend))
            }
            ApiError::Relay(RelayError::Transport { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(RelayErrorBody::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_status_passthrough() {
        let err = ApiError::Relay(RelayError::Rejected { backend: "Discord", status: 429 });
        assert_eq!(
            err.status_and_message(),
            (StatusCode::TOO_MANY_REQUESTS, "Failed to send to Discord".to_string())
        );
    }

    #[test]
    fn test_non_error_status_becomes_500() {
        let err = ApiError::Relay(RelayError::Rejected { backend: "Resend", status: 302 });
        assert_eq!(err.status_and_message().0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_configuration_detail_hidden() {
        let err = ApiError::Relay(RelayError::Configuration(
            "Missing DISCORD_WEBHOOK_URL environment variable".to_string(),
        ));
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!message.contains("DISCORD_WEBHOOK_URL"));
    }
}
