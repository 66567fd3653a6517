//! Business services containing domain logic and use cases.

pub mod generation;
pub mod quota;
pub mod verification;

// Re-export commonly used types
pub use generation::{
    GenerationBackend, GenerationGate, GenerationOutcome, GenerationOutput, GenerationRequest,
};
pub use quota::QuotaService;
pub use verification::{
    CodeDeliveryTrait, RegisterResult, VerificationService, VerificationServiceConfig,
    VerifyResult,
};
