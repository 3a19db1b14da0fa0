//! Covenant Recruitment - Guild application wizard and submission relay
//!
//! - The wizard collects a prospect's ranked paths, identity and statement,
//!   then sends one flattened application to the relay
//! - The relay forwards it to the one delivery backend the deployment
//!   configures (Discord, Formspree, Resend, or Resend plus a Google Sheet)

pub mod application;
pub mod domain;
pub mod infrastructure;
