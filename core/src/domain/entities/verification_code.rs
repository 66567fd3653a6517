//! One-time verification code sent to an email address.

use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Number of digits in a verification code
pub const CODE_LENGTH: usize = 6;

/// A numeric one-time code, leading zeros preserved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Generates a fresh code uniformly from `000000`..=`999999`
    ///
    /// Uses the OS CSPRNG. Codes are independent across calls and users;
    /// collisions are allowed.
    pub fn generate() -> Self {
        let value: u32 = OsRng.gen_range(0..1_000_000);
        Self(format!("{:0width$}", value, width = CODE_LENGTH))
    }

    /// Borrow the digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the digit string
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Compare a stored code with a user submission
    ///
    /// Both sides are trimmed and compared as strings (never numerically, so
    /// `"012345"` and `"12345"` differ), in constant time for equal lengths.
    pub fn matches(stored: &str, submitted: &str) -> bool {
        let stored = stored.trim();
        let submitted = submitted.trim();
        if stored.is_empty() || stored.len() != submitted.len() {
            return false;
        }
        constant_time_eq(stored.as_bytes(), submitted.as_bytes())
    }
}

impl std::fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VerificationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
