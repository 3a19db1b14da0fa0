//! Domain entities

mod application_draft;

pub use application_draft::{ApplicationDraft, DraftError, IdentityField};
