//! Verification service module for email-based identity confirmation
//!
//! This module provides the one-time code workflow:
//! - Code generation and delivery through an injected channel
//! - Recording the issued code only after delivery succeeded
//! - Code verification against the most recently issued code

mod config;
pub mod mock;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::CodeDeliveryTrait;
pub use types::{RegisterResult, VerifyResult};
