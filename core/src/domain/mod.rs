//! Domain layer containing business entities and value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{UserRecord, VerificationCode, CODE_LENGTH, QUOTA_LIMIT};
pub use value_objects::QuotaStatus;
