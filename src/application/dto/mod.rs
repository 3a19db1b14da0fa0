//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so both the relay endpoint and the
//! wizard's relay client agree on the JSON without touching the domain model.

pub mod relay;

pub use relay::*;
