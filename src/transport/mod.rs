//! Submission Transports
//!
//! Exactly one transport carries a valid submission: a JSON POST to the
//! portfolio backend, or the EmailJS browser SDK when the build selects
//! the relay. Both resolve to a display message or a `SubmitError`, and
//! both race the configured deadline.

mod backend;
mod relay;

use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::config::{SiteConfig, TransportKind};
use crate::models::ContactPayload;

pub use backend::failure_from_body;

/// Shown when the transport succeeds without a message of its own.
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// Why a submission failed, from most to least specific message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The server rejected individual fields.
    #[error("{0}")]
    FieldErrors(String),
    /// The server answered with a single error string.
    #[error("{0}")]
    Server(String),
    /// Relay credentials missing or still placeholders.
    #[error("Email service is not configured yet. Please try again later.")]
    Config,
    /// The request never completed (network down, CORS, DNS).
    #[error("Failed to send message. Please check your connection and try again.")]
    Network,
    /// The deadline elapsed before the transport answered.
    #[error("The request timed out. Please try again.")]
    Timeout,
}

/// Send through the configured transport. The returned string is the
/// success banner text.
pub async fn submit(config: SiteConfig, payload: &ContactPayload) -> Result<String, SubmitError> {
    let send = async move {
        match config.transport {
            TransportKind::Backend => backend::post_contact(config.backend_url, payload).await,
            TransportKind::Relay => relay::send_via_relay(&config, payload).await,
        }
    };

    match config.submit_timeout_ms {
        None => send.await,
        Some(ms) => {
            match future::select(Box::pin(send), Box::pin(TimeoutFuture::new(ms))).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(SubmitError::Timeout),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            SubmitError::Network.to_string(),
            "Failed to send message. Please check your connection and try again."
        );
        assert_eq!(SubmitError::Timeout.to_string(), "The request timed out. Please try again.");
        assert_eq!(
            SubmitError::Config.to_string(),
            "Email service is not configured yet. Please try again later."
        );
    }

    #[test]
    fn test_server_variants_pass_their_text_through() {
        let err = SubmitError::Server("Failed to send email. Please try again later.".into());
        assert_eq!(err.to_string(), "Failed to send email. Please try again later.");

        let err = SubmitError::FieldErrors("Email is required".into());
        assert_eq!(err.to_string(), "Email is required");
    }
}
