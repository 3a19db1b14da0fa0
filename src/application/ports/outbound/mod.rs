//! Outbound ports - Interfaces that the application requires from external systems

mod delivery_port;
mod relay_port;

pub use delivery_port::{DeliveryError, DeliveryPort, DeliveryReceipt, SubmissionLogPort};
pub use relay_port::{RelayPort, RelayReceipt, RelaySubmitError};
