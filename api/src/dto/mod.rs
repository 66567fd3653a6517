pub mod auth;
pub mod credits;

pub use auth::{LoginRequest, VerifyRequest};
pub use credits::{CreditsQuery, CreditsResponse};
