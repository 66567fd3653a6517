//! Value objects representing immutable domain concepts.

pub mod quota;

pub use quota::QuotaStatus;
