//! Trait for code delivery integration

use async_trait::async_trait;

/// Channel that transmits a one-time code to its destination
///
/// Implementations report failure as a human-readable reason. The service
/// bounds every call with its own timeout, so implementations need not.
#[async_trait]
pub trait CodeDeliveryTrait: Send + Sync {
    /// Deliver `code` to `destination`, returning the provider message id
    async fn deliver(&self, destination: &str, code: &str) -> Result<String, String>;
}
