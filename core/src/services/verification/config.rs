//! Configuration for the verification service

use std::time::Duration;

use tg_shared::config::EmailConfig;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Upper bound for a single code delivery; exceeding it counts as a
    /// delivery failure
    pub delivery_timeout: Duration,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            delivery_timeout: Duration::from_secs(10),
        }
    }
}

impl From<&EmailConfig> for VerificationServiceConfig {
    fn from(config: &EmailConfig) -> Self {
        Self {
            delivery_timeout: config.timeout(),
        }
    }
}
