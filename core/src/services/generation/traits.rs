//! Trait for the generation backend

use async_trait::async_trait;

use super::types::{GenerationOutput, GenerationRequest};

/// External generation call
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Run one generation; `Err` carries a human-readable reason
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationOutput, String>;
}
