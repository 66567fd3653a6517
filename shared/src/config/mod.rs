//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `database` - Identity store connection and pool configuration
//! - `email` - Verification code delivery (email provider) configuration
//! - `environment` - Environment detection
//! - `quota` - Generation credit limits and failure policy
//! - `server` - HTTP server and CORS configuration
//!
//! Every section implements `Default` and `from_env()`.

pub mod database;
pub mod email;
pub mod environment;
pub mod quota;
pub mod server;

pub use database::DatabaseConfig;
pub use email::{EmailConfig, EmailProvider};
pub use environment::Environment;
pub use quota::QuotaConfig;
pub use server::{CorsConfig, ServerConfig};

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is missing or malformed.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
