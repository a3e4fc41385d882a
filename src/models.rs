//! Wire Models
//!
//! Request and response shapes for the contact transports.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Body of the JSON POST to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Success body from the backend. Extra fields (id, timestamps) are
/// ignored; only the display message matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure body from the backend: a single error string, a per-field
/// map, or neither on proxies that answer with plain text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiFailure {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<HashMap<String, String>>,
}

/// Template parameters for the relay transport. Key names must match
/// the placeholders configured in the email template.
#[derive(Debug, Clone, Serialize)]
pub struct RelayParams {
    pub from_name: String,
    pub reply_to: String,
    pub to_email: String,
    pub subject: String,
    pub message: String,
    pub sent_date: String,
    pub sent_time: String,
}
