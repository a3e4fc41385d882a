//! Backend Transport
//!
//! JSON POST to the contact endpoint, with best-effort extraction of a
//! useful message from failure bodies.

use gloo_net::http::Request;

use super::{SubmitError, SUCCESS_MESSAGE};
use crate::models::{ApiFailure, ContactPayload, SubmitAck};

pub async fn post_contact(url: &str, payload: &ContactPayload) -> Result<String, SubmitError> {
    let request = Request::post(url).json(payload).map_err(|_| SubmitError::Network)?;
    let response = request.send().await.map_err(|err| {
        web_sys::console::error_1(&format!("[FORM] POST {url} failed: {err}").into());
        SubmitError::Network
    })?;

    if response.ok() {
        let message = response
            .json::<SubmitAck>()
            .await
            .ok()
            .and_then(|ack| ack.message)
            .unwrap_or_else(|| SUCCESS_MESSAGE.to_string());
        return Ok(message);
    }

    let status = response.status();
    let body = response.json::<ApiFailure>().await.unwrap_or_default();
    Err(failure_from_body(status, &body))
}

/// Pick the most specific failure the body supports: per-field messages,
/// then the server's own error string, then a status-line fallback.
pub fn failure_from_body(status: u16, body: &ApiFailure) -> SubmitError {
    if let Some(errors) = body.errors.as_ref().filter(|map| !map.is_empty()) {
        let mut fields: Vec<_> = errors.iter().collect();
        fields.sort_by_key(|(field, _)| field.as_str());
        let joined =
            fields.iter().map(|(_, message)| message.as_str()).collect::<Vec<_>>().join("; ");
        return SubmitError::FieldErrors(joined);
    }
    if let Some(error) = body.error.as_ref().filter(|text| !text.is_empty()) {
        return SubmitError::Server(error.clone());
    }
    SubmitError::Server(format!("Something went wrong (status {status}). Please try again."))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_field_errors_win_and_are_sorted() {
        let mut errors = HashMap::new();
        errors.insert("name".to_string(), "Name must be at least 2 characters long".to_string());
        errors.insert("email".to_string(), "Email is required".to_string());
        let body = ApiFailure { error: Some("Invalid input".into()), errors: Some(errors) };

        assert_eq!(
            failure_from_body(400, &body),
            SubmitError::FieldErrors(
                "Email is required; Name must be at least 2 characters long".into()
            )
        );
    }

    #[test]
    fn test_single_error_string_passes_through() {
        let body = ApiFailure {
            error: Some("Failed to send email. Please try again later.".into()),
            errors: None,
        };
        assert_eq!(
            failure_from_body(500, &body),
            SubmitError::Server("Failed to send email. Please try again later.".into())
        );
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        let body = ApiFailure::default();
        assert_eq!(
            failure_from_body(502, &body),
            SubmitError::Server("Something went wrong (status 502). Please try again.".into())
        );
    }

    #[test]
    fn test_empty_error_map_is_not_field_errors() {
        let body = ApiFailure { error: None, errors: Some(HashMap::new()) };
        assert!(matches!(failure_from_body(400, &body), SubmitError::Server(_)));
    }
}
