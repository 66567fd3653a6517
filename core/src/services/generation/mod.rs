//! Metered access to the external image-generation backend
//!
//! The backend itself is opaque; only its success or failure matters here.
//! A credit is consumed only after the backend reports success.

mod service;
mod traits;
mod types;


pub use service::GenerationGate;
pub use traits::GenerationBackend;
pub use types::{GenerationOutcome, GenerationOutput, GenerationRequest};
