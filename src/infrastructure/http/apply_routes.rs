use axum::{body::Bytes, extract::State, http::Method, Json};
use std::sync::Arc;

use crate::application::dto::RelaySuccessBody;
use crate::domain::value_objects::SubmissionPayload;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::state::AppState;

/// Relay a recruitment application to the configured delivery backend
///
/// Mounted for every method so that anything but POST gets the JSON 405.
pub async fn apply(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<Json<RelaySuccessBody>, ApiError> {
    if method != Method::POST {
        tracing::debug!(%method, "Rejected non-POST application request");
        return Err(ApiError::MethodNotAllowed);
    }

    state.relay_service.ensure_configured()?;

    let payload: SubmissionPayload = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Malformed application payload");
        ApiError::MalformedPayload
    })?;

    let receipt = state.relay_service.relay(payload).await?;
    Ok(Json(RelaySuccessBody::new(receipt.id)))
}
