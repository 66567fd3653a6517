//! Mock code delivery channel for tests and local development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::traits::CodeDeliveryTrait;

/// Records every delivered code instead of sending it
#[derive(Clone, Default)]
pub struct MockCodeDelivery {
    sent_codes: Arc<Mutex<HashMap<String, Vec<String>>>>,
    should_fail: Arc<AtomicBool>,
    delay: Option<Duration>,
    message_count: Arc<AtomicU64>,
}

impl MockCodeDelivery {
    /// Create a mock that always succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that always fails
    pub fn failing() -> Self {
        let mock = Self::default();
        mock.set_should_fail(true);
        mock
    }

    /// Create a mock that sleeps before answering
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Toggle failure simulation
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Most recent code delivered to `destination`
    pub fn last_code(&self, destination: &str) -> Option<String> {
        self.sent_codes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(destination)
            .and_then(|codes| codes.last().cloned())
    }

    /// All codes delivered to `destination`, oldest first
    pub fn codes_for(&self, destination: &str) -> Vec<String> {
        self.sent_codes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(destination)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of successful deliveries
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CodeDeliveryTrait for MockCodeDelivery {
    async fn deliver(&self, destination: &str, code: &str) -> Result<String, String> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.should_fail.load(Ordering::SeqCst) {
            return Err("Mock delivery failure".to_string());
        }

        self.sent_codes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .entry(destination.to_string())
            .or_default()
            .push(code.to_string());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        Ok(format!("mock-msg-{}", count))
    }
}
