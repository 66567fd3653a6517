//! # TryOn Gate Core
//!
//! Core business logic for the TryOn Gate backend: the identity record model,
//! the identity store contract, one-time code verification over email, and
//! lifetime generation credits.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{QuotaStatus, UserRecord, VerificationCode, CODE_LENGTH, QUOTA_LIMIT};
pub use errors::{DomainError, DomainResult};
pub use repositories::{InMemoryUserRepository, UserRepository};
pub use services::{
    CodeDeliveryTrait, GenerationBackend, GenerationGate, GenerationOutcome, GenerationOutput,
    GenerationRequest, QuotaService, RegisterResult, VerificationService,
    VerificationServiceConfig, VerifyResult,
};
