//! API response types

use serde::{Deserialize, Serialize};

/// Uniform `{success, message}` envelope returned by the auth endpoints.
///
/// The HTTP status is always 200; `success` is the authoritative result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Whether the operation succeeded
    pub success: bool,

    /// Human-readable outcome
    pub message: String,
}

impl MessageResponse {
    /// Create a successful response
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Create a failure response
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,

    /// Service name
    pub service: String,

    /// Crate version
    pub version: String,

    /// Identity store reachability ("up" / "down")
    pub store: String,

    /// RFC 3339 timestamp
    pub timestamp: String,
}
