//! Result of a quota check.

use serde::{Deserialize, Serialize};

/// Whether a generation may start, and how many credits are left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaStatus {
    pub allowed: bool,
    pub remaining: u32,
    pub limit: u32,
}

impl QuotaStatus {
    /// Status for a given consumed count
    pub fn from_count(generation_count: u32, limit: u32) -> Self {
        Self {
            allowed: generation_count < limit,
            remaining: limit.saturating_sub(generation_count),
            limit,
        }
    }

    /// Full allowance, used for unknown emails and fail-open
    pub fn full(limit: u32) -> Self {
        Self::from_count(0, limit)
    }

    /// Denied with nothing left, used when failing closed
    pub fn denied(limit: u32) -> Self {
        Self {
            allowed: false,
            remaining: 0,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_count() {
        assert_eq!(
            QuotaStatus::from_count(0, 3),
            QuotaStatus { allowed: true, remaining: 3, limit: 3 }
        );
        assert_eq!(
            QuotaStatus::from_count(2, 3),
            QuotaStatus { allowed: true, remaining: 1, limit: 3 }
        );
        assert_eq!(
            QuotaStatus::from_count(3, 3),
            QuotaStatus { allowed: false, remaining: 0, limit: 3 }
        );
        assert_eq!(QuotaStatus::from_count(9, 3).remaining, 0);
    }
}
