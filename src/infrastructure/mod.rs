//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: Application configuration from the environment
//! - Delivery: Discord, Formspree, Resend and Google Sheets adapters
//! - HTTP: The relay endpoint and its router
//! - Relay client: The wizard's HTTP adapter for the relay endpoint
//! - State: Shared application state

pub mod config;
pub mod delivery;
pub mod http;
pub mod relay_client;
pub mod state;
