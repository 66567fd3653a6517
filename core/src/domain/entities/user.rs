//! User record held by the identity store, keyed by normalized email.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tg_shared::config::quota::DEFAULT_QUOTA_LIMIT;

/// Lifetime generation credits granted to each verified email
pub const QUOTA_LIMIT: u32 = DEFAULT_QUOTA_LIMIT;

/// One identity per email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Normalized (trimmed, lowercase) email, the natural key
    pub email: String,

    /// Name supplied at the most recent registration
    pub name: String,

    /// Most recently issued one-time code
    pub verification_code: String,

    /// Timestamp of the most recent code issuance
    pub last_login_at: DateTime<Utc>,

    /// Confirmed generations consumed; never reset
    pub generation_count: u32,
}

impl UserRecord {
    /// Creates the record written by a first-time code issuance
    pub fn new(email: String, name: String, verification_code: String, now: DateTime<Utc>) -> Self {
        Self {
            email,
            name,
            verification_code,
            last_login_at: now,
            generation_count: 0,
        }
    }

    /// Overwrites code, name and timestamp; the generation count is kept
    pub fn reissue(&mut self, name: String, verification_code: String, now: DateTime<Utc>) {
        self.name = name;
        self.verification_code = verification_code;
        self.last_login_at = now;
    }

    /// Credits left before the lifetime limit is reached
    pub fn remaining_credits(&self, limit: u32) -> u32 {
        limit.saturating_sub(self.generation_count)
    }

    /// Whether another generation may start
    pub fn has_credit(&self, limit: u32) -> bool {
        self.generation_count < limit
    }
}
