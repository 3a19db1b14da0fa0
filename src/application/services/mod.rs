//! Application services - Use case implementations
//!
//! The wizard drives one prospect's application up to a single relay call; the
//! relay service forwards that call to whichever delivery backend is deployed.

pub mod relay_service;
pub mod wizard_service;

pub use relay_service::{RelayError, RelayService};
pub use wizard_service::{RecruitmentWizard, WizardError};
