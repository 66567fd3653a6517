//! Request and result types for metered generation

use serde::{Deserialize, Serialize};

/// Inputs forwarded to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Publicly reachable URL of the subject image
    pub subject_url: String,
    /// Publicly reachable URL of the garment image
    pub garment_url: String,
}

/// Raw backend output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Output plus the credits left after this generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub output: GenerationOutput,
    pub remaining: u32,
}
