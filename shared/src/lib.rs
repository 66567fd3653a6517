//! Shared utilities and common types for the TryOn Gate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelope returned at the HTTP boundary
//! - Email address utilities (normalization, validation, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    DatabaseConfig, EmailConfig, EmailProvider, Environment, QuotaConfig, ServerConfig,
};
pub use types::{HealthResponse, MessageResponse};
pub use utils::email;
