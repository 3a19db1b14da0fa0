//! Wire bodies exchanged between the wizard and the relay endpoint

use serde::{Deserialize, Serialize};

/// `200 OK` body: `{"success": true, "id": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaySuccessBody {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RelaySuccessBody {
    pub fn new(id: Option<String>) -> Self {
        Self { success: true, id }
    }
}

/// Error body for every 4xx/5xx answer: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayErrorBody {
    pub error: String,
}

impl RelayErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
