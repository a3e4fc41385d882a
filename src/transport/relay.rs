//! Relay Transport
//!
//! Sends through the EmailJS browser SDK loaded in index.html, so the
//! site needs no backend of its own. Credentials left as dashboard
//! placeholders surface as a configuration error instead of an opaque
//! SDK rejection.

use wasm_bindgen::prelude::*;

use super::{SubmitError, SUCCESS_MESSAGE};
use crate::config::SiteConfig;
use crate::models::{ContactPayload, RelayParams};

#[wasm_bindgen]
extern "C" {
    /// `emailjs.send(serviceId, templateId, params, publicKey)`.
    #[wasm_bindgen(js_namespace = emailjs, catch)]
    async fn send(
        service_id: &str,
        template_id: &str,
        template_params: JsValue,
        public_key: &str,
    ) -> Result<JsValue, JsValue>;
}

pub async fn send_via_relay(
    config: &SiteConfig,
    payload: &ContactPayload,
) -> Result<String, SubmitError> {
    if !config.relay_configured() {
        return Err(SubmitError::Config);
    }

    let params = serde_wasm_bindgen::to_value(&relay_params(config, payload))
        .map_err(|_| SubmitError::Network)?;

    send(config.relay_service_id, config.relay_template_id, params, config.relay_public_key)
        .await
        .map(|_| SUCCESS_MESSAGE.to_string())
        .map_err(|err| {
            web_sys::console::error_1(&err);
            SubmitError::Server("The email service rejected the message. Please try again later.".into())
        })
}

/// Field values plus send-time metadata for the email template.
fn relay_params(config: &SiteConfig, payload: &ContactPayload) -> RelayParams {
    let now = js_sys::Date::new_0();
    RelayParams {
        from_name: payload.name.clone(),
        reply_to: payload.email.clone(),
        to_email: config.contact_email.to_string(),
        subject: payload.subject.clone(),
        message: payload.message.clone(),
        sent_date: String::from(now.to_locale_date_string("en-US", &JsValue::UNDEFINED)),
        sent_time: String::from(now.to_locale_time_string("en-US")),
    }
}
