//! Email delivery configuration module
//!
//! Controls which provider transmits one-time verification codes and how
//! long the service waits for it.

use serde::{Deserialize, Serialize};

use super::env_or;

/// Sender used by the Resend sandbox when no custom domain is configured
pub const DEFAULT_FROM_ADDRESS: &str = "onboarding@resend.dev";

/// Supported email providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Resend HTTP API
    Resend,
    /// Log-only sender for development and tests
    #[default]
    Mock,
}

impl std::str::FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "resend" => Ok(EmailProvider::Resend),
            "mock" | "console" => Ok(EmailProvider::Mock),
            other => Err(format!("Unknown email provider: {}", other)),
        }
    }
}

/// Email service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Provider selection
    pub provider: EmailProvider,

    /// Provider API key (Resend)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sender address
    pub from_address: String,

    /// Upper bound for a single delivery, retries included
    pub timeout_secs: u64,

    /// Upper bound for one provider request; several must fit in `timeout_secs`
    pub request_timeout_secs: u64,

    /// Maximum attempts per message on retryable provider errors
    pub max_retries: u32,

    /// Initial backoff between attempts in milliseconds
    pub retry_delay_ms: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::default(),
            api_key: None,
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
            timeout_secs: 10,
            request_timeout_secs: 2,
            max_retries: 3,
            retry_delay_ms: 500,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    ///
    /// A `RESEND_API_KEY` without an explicit `EMAIL_PROVIDER` selects Resend.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_key = std::env::var("RESEND_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let provider = match std::env::var("EMAIL_PROVIDER") {
            Ok(value) => value.parse().unwrap_or(defaults.provider),
            Err(_) if api_key.is_some() => EmailProvider::Resend,
            Err(_) => defaults.provider,
        };

        Self {
            provider,
            api_key,
            from_address: std::env::var("EMAIL_FROM").unwrap_or(defaults.from_address),
            timeout_secs: env_or("EMAIL_TIMEOUT_SECS", defaults.timeout_secs),
            request_timeout_secs: env_or(
                "EMAIL_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
            max_retries: env_or("EMAIL_MAX_RETRIES", defaults.max_retries),
            retry_delay_ms: env_or("EMAIL_RETRY_DELAY_MS", defaults.retry_delay_ms),
        }
    }

    /// Delivery timeout as a `Duration`
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}
