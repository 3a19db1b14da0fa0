//! Submission payload - the flat, human-labeled record sent to officers
//!
//! The payload is the only thing that crosses the wire, both from the wizard to
//! the relay and from the relay to a delivery backend. Keys are the labels an
//! officer reads; insertion order is kept so emails list fields the way the
//! form asked for them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Key prefix reserved for metadata that is not shown as a field
pub const RESERVED_PREFIX: char = '_';

/// Key carrying the notification subject line
pub const SUBJECT_KEY: &str = "_subject";

/// Ordered label -> value mapping
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionPayload(IndexMap<String, String>);

impl SubmissionPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn subject(&self) -> Option<&str> {
        self.get(SUBJECT_KEY)
    }

    /// Fields meant for display, skipping reserved metadata keys
    pub fn visible_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(key, _)| !key.starts_with(RESERVED_PREFIX))
    }

    /// Render the visible fields as an HTML email body
    ///
    /// Each field becomes `<strong>key:</strong> value`, fields are separated by
    /// `<br>`. Keys and values are escaped, and newlines inside a value (the
    /// activity listing) become `<br>` as well.
    pub fn render_email_html(&self) -> String {
        self.visible_fields()
            .map(|(key, value)| {
                let value = html_escape::encode_text(value).replace('\n', "<br>");
                format!(
                    "<strong>{}:</strong> {}",
                    html_escape::encode_text(key),
                    value
                )
            })
            .collect::<Vec<_>>()
            .join("<br>")
    }
}
