//! Shared application state

use reqwest::Client;

use crate::application::services::RelayService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::delivery::create_delivery_backend;

/// Shared application state
///
/// Immutable after startup; each request only reads it.
pub struct AppState {
    pub relay_service: RelayService,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let relay_service = match &config.delivery {
            Ok(backend) => {
                let (delivery, submission_log) = create_delivery_backend(Client::new(), backend);
                tracing::info!(backend = delivery.backend_name(), "Delivery backend ready");
                let service = RelayService::new(delivery);
                match submission_log {
                    Some(log) => service.with_submission_log(log),
                    None => service,
                }
            }
            Err(e) => {
                // Keep serving; every submission gets a configuration error
                tracing::error!(error = %e, "Delivery backend misconfigured");
                RelayService::unconfigured(e.to_string())
            }
        };

        Self { relay_service }
    }
}
