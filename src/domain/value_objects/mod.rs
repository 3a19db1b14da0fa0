//! Value objects - Immutable objects defined by their attributes

mod character_class;
mod path;
mod submission_payload;
mod wizard_step;

pub use character_class::{CharacterClass, UnknownClass};
pub use path::{PathKind, PathRank};
pub use submission_payload::{SubmissionPayload, RESERVED_PREFIX, SUBJECT_KEY};
pub use wizard_step::WizardStep;
