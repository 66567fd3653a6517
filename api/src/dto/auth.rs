use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Address the code is sent to; normalized by the service
    #[validate(length(max = 320, message = "Invalid email address."))]
    pub email: String,

    /// Display name, overwritten on every login
    #[validate(length(max = 255, message = "Name is too long."))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyRequest {
    #[validate(length(max = 320, message = "Invalid email address."))]
    pub email: String,

    /// Code as typed by the user; surrounding whitespace is ignored
    #[validate(length(max = 64, message = "Invalid code."))]
    pub code: String,
}
