//! Generation credit configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Lifetime generation credits per verified email
pub const DEFAULT_QUOTA_LIMIT: u32 = 3;

/// Quota policy configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuotaConfig {
    /// Lifetime credits per identity
    pub limit: u32,

    /// Allow generation when the identity store cannot be read.
    /// `false` denies instead.
    pub fail_open: bool,

    /// Upper bound for one call to the generation backend, in seconds
    pub generation_timeout_secs: u64,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_QUOTA_LIMIT,
            fail_open: true,
            generation_timeout_secs: 600,
        }
    }
}

impl QuotaConfig {
    /// Create from environment variables
    ///
    /// The credit limit itself is fixed; only the failure policy and the
    /// generation timeout are tunable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fail_open: env_or("QUOTA_FAIL_OPEN", defaults.fail_open),
            generation_timeout_secs: env_or(
                "GENERATION_TIMEOUT_SECS",
                defaults.generation_timeout_secs,
            ),
            ..defaults
        }
    }

    /// Generation timeout as a `Duration`
    pub fn generation_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.generation_timeout_secs)
    }
}
