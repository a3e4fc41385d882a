//! Site Configuration
//!
//! Build-time settings with `option_env!` overrides, resolved once at
//! startup. The transport is an explicit choice: the backend POST by
//! default, the email relay when `PORTFOLIO_TRANSPORT=relay`.

/// Which transport a valid submission goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportKind {
    /// JSON POST to `backend_url`.
    Backend,
    /// EmailJS browser SDK, no custom backend.
    Relay,
}

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/api/contact";
const DEFAULT_CONTACT_EMAIL: &str = "john.doe@example.com";
const DEFAULT_TIMEOUT_MS: u32 = 15_000;

/// Dashboard placeholders; a relay configured with these is treated as
/// unconfigured rather than sent to the SDK.
const PLACEHOLDER_VALUES: [&str; 3] = ["YOUR_PUBLIC_KEY", "YOUR_SERVICE_ID", "YOUR_TEMPLATE_ID"];

#[derive(Clone, Copy, Debug)]
pub struct SiteConfig {
    pub transport: TransportKind,
    pub backend_url: &'static str,
    pub relay_public_key: &'static str,
    pub relay_service_id: &'static str,
    pub relay_template_id: &'static str,
    /// Recipient shown in the relay template metadata.
    pub contact_email: &'static str,
    /// Submission deadline; `None` disables the timeout.
    pub submit_timeout_ms: Option<u32>,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self {
            transport: match option_env!("PORTFOLIO_TRANSPORT") {
                Some("relay") => TransportKind::Relay,
                _ => TransportKind::Backend,
            },
            backend_url: option_env!("PORTFOLIO_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL),
            relay_public_key: option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY")
                .unwrap_or("YOUR_PUBLIC_KEY"),
            relay_service_id: option_env!("PORTFOLIO_EMAILJS_SERVICE_ID")
                .unwrap_or("YOUR_SERVICE_ID"),
            relay_template_id: option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID")
                .unwrap_or("YOUR_TEMPLATE_ID"),
            contact_email: option_env!("PORTFOLIO_CONTACT_EMAIL").unwrap_or(DEFAULT_CONTACT_EMAIL),
            submit_timeout_ms: parse_timeout(option_env!("PORTFOLIO_SUBMIT_TIMEOUT_MS")),
        }
    }

    /// All three relay credentials present and none left as a
    /// placeholder.
    pub fn relay_configured(&self) -> bool {
        [self.relay_public_key, self.relay_service_id, self.relay_template_id]
            .iter()
            .all(|value| !value.is_empty() && !PLACEHOLDER_VALUES.contains(value))
    }
}

/// `0` disables the timeout; unparseable input falls back to the
/// default instead of silently disabling it.
fn parse_timeout(raw: Option<&str>) -> Option<u32> {
    match raw {
        None => Some(DEFAULT_TIMEOUT_MS),
        Some(raw) => match raw.parse::<u32>() {
            Ok(0) => None,
            Ok(ms) => Some(ms),
            Err(_) => Some(DEFAULT_TIMEOUT_MS),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> SiteConfig {
        SiteConfig {
            transport: TransportKind::Relay,
            backend_url: DEFAULT_BACKEND_URL,
            relay_public_key: "pk_live",
            relay_service_id: "service_1",
            relay_template_id: "template_1",
            contact_email: DEFAULT_CONTACT_EMAIL,
            submit_timeout_ms: Some(DEFAULT_TIMEOUT_MS),
        }
    }

    #[test]
    fn test_relay_configured_with_real_values() {
        assert!(base_config().relay_configured());
    }

    #[test]
    fn test_placeholder_credentials_count_as_unconfigured() {
        let mut config = base_config();
        config.relay_public_key = "YOUR_PUBLIC_KEY";
        assert!(!config.relay_configured());

        let mut config = base_config();
        config.relay_template_id = "";
        assert!(!config.relay_configured());
    }

    #[test]
    fn test_timeout_zero_disables() {
        assert_eq!(parse_timeout(Some("0")), None);
    }

    #[test]
    fn test_timeout_default_and_override() {
        assert_eq!(parse_timeout(None), Some(15_000));
        assert_eq!(parse_timeout(Some("30000")), Some(30_000));
    }

    #[test]
    fn test_timeout_garbage_falls_back_to_default() {
        assert_eq!(parse_timeout(Some("soon")), Some(15_000));
        assert_eq!(parse_timeout(Some("-5")), Some(15_000));
    }
}
