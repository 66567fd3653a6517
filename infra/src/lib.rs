//! # Infrastructure Layer
//!
//! Concrete implementations of the seams defined in `tg_core`:
//!
//! - **Database**: MySQL identity store using SQLx
//! - **Email**: verification code delivery (Resend HTTP API, mock sender)
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Email delivery module - external email providers
pub mod email;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration sections consumed by the infrastructure layer
    //!
    //! Defined in `tg_shared::config` and loaded by the binary.

    pub use tg_shared::config::{DatabaseConfig, EmailConfig, EmailProvider, Environment};
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email provider error
    #[error("Email service error: {0}")]
    Email(String),
}
