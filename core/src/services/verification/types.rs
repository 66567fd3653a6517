//! Types for verification service results

use chrono::{DateTime, Utc};

/// Result of issuing a code
#[derive(Debug, Clone)]
pub struct RegisterResult {
    /// Normalized email the code was sent to
    pub email: String,
    /// Message id reported by the delivery channel
    pub message_id: String,
    /// When the code was recorded
    pub issued_at: DateTime<Utc>,
}

/// Result of a successful verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyResult {
    /// Normalized email that was verified
    pub email: String,
    /// Name stored at the latest registration
    pub name: String,
}
