use serde::{Deserialize, Serialize};

use tg_core::domain::value_objects::QuotaStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditsQuery {
    #[serde(default)]
    pub email: String,
}

/// Remaining generation credits for one email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditsResponse {
    pub success: bool,
    pub message: String,
    pub allowed: bool,
    pub remaining: u32,
    pub limit: u32,
}

impl From<QuotaStatus> for CreditsResponse {
    fn from(status: QuotaStatus) -> Self {
        Self {
            success: true,
            message: format!("Credits: {}/{}", status.remaining, status.limit),
            allowed: status.allowed,
            remaining: status.remaining,
            limit: status.limit,
        }
    }
}
