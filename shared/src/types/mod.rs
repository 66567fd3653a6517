//! Type definitions shared across crates
//!
//! - `response` - boundary response envelope and health check payload

pub mod response;

pub use response::{HealthResponse, MessageResponse};
