//! Domain entities representing core business objects.

pub mod user;
pub mod verification_code;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use user::{UserRecord, QUOTA_LIMIT};
pub use verification_code::{VerificationCode, CODE_LENGTH};
