//! HTTP REST API routes

mod apply_routes;
pub mod error;

use std::any::Any;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::application::dto::RelayErrorBody;
use crate::infrastructure::relay_client::APPLY_PATH;
use crate::infrastructure::state::AppState;

pub use apply_routes::*;
pub use error::ApiError;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().route(APPLY_PATH, any(apply_routes::apply))
}

/// Full application router: API routes, health check and the HTTP layers
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(create_routes())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Last line of defence: a panicking handler still answers with a JSON 500
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(RelayErrorBody::new("Internal Server Error")),
    )
        .into_response()
}
