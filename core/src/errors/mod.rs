//! Domain-specific error types and error handling.
//!
//! Every failure in the verification and quota flows is one of these
//! variants. The HTTP layer turns them into `{success: false, message}`
//! using [`DomainError::user_message`]; none of them is fatal to the process.

use thiserror::Error;


/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed input (e.g. not an email address)
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Identity store unreachable or failing
    #[error("Identity store unavailable: {message}")]
    StoreUnavailable { message: String },

    /// Code delivery channel failed or timed out; nothing was written
    #[error("Code delivery failed: {message}")]
    DeliveryFailed { message: String },

    /// Code was delivered but recording it failed
    #[error("Code delivered but not recorded: {message}")]
    PartialWriteFailure { message: String },

    /// No record for the email
    #[error("User not found")]
    UserNotFound,

    /// Submitted code differs from the stored one
    #[error("Invalid verification code")]
    InvalidCode,

    /// All lifetime credits are used
    #[error("Generation quota exceeded (limit {limit})")]
    QuotaExceeded { limit: u32 },

    /// Generation backend failed or timed out; no credit was consumed
    #[error("Generation failed: {message}")]
    GenerationFailed { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Message shown to the caller in the `{success, message}` envelope
    pub fn user_message(&self) -> String {
        match self {
            DomainError::Validation { message } => message.clone(),
            DomainError::StoreUnavailable { .. } => "Database Error".to_string(),
            DomainError::DeliveryFailed { message } => format!("Email Failed: {}", message),
            DomainError::PartialWriteFailure { .. } => "Database Write Error".to_string(),
            DomainError::UserNotFound => "User not found.".to_string(),
            DomainError::InvalidCode => "Invalid code.".to_string(),
            DomainError::QuotaExceeded { limit } => {
                format!("Quota exceeded. You have used all {} tries.", limit)
            }
            DomainError::GenerationFailed { message } => format!("Generation failed: {}", message),
            DomainError::Internal { .. } => "Internal Server Error".to_string(),
        }
    }

    /// Stable machine-readable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            DomainError::DeliveryFailed { .. } => "DELIVERY_FAILED",
            DomainError::PartialWriteFailure { .. } => "PARTIAL_WRITE_FAILURE",
            DomainError::UserNotFound => "USER_NOT_FOUND",
            DomainError::InvalidCode => "INVALID_CODE",
            DomainError::QuotaExceeded { .. } => "QUOTA_EXCEEDED",
            DomainError::GenerationFailed { .. } => "GENERATION_FAILED",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
