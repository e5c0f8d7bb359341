// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock text generator for deterministic testing.
//!
//! `MockGenerator` implements the `Generator` capability with
//! pre-configured responses, enabling fast, CI-runnable tests without an
//! actual model behind it.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use frontdesk_core::error::FrontdeskError;
use frontdesk_core::traits::{Capability, Generator};
use frontdesk_core::types::{CapabilityType, HealthStatus};

/// A mock generator that returns pre-configured responses.
///
/// Responses are popped from a FIFO queue. When the queue is empty, a
/// default "mock reply" text is returned. With `failing()` every call
/// errors instead, for exercising the fallback path.
pub struct MockGenerator {
    responses: Arc<Mutex<VecDeque<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl MockGenerator {
    /// Create a mock generator with an empty response queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Create a mock generator pre-loaded with the given responses.
    pub fn with_responses(responses: Vec<&str>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(
                responses.into_iter().map(String::from).collect(),
            )),
            prompts: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Create a mock generator whose every call fails.
    pub fn failing() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// Add a response to the end of the queue.
    pub async fn add_response(&self, text: &str) {
        self.responses.lock().await.push_back(text.to_string());
    }

    /// Every prompt this generator has been called with, in order.
    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Capability for MockGenerator {
    fn name(&self) -> &str {
        "mock-generator"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn capability_type(&self) -> CapabilityType {
        CapabilityType::Generator
    }

    async fn health_check(&self) -> Result<HealthStatus, FrontdeskError> {
        if self.fail {
            Ok(HealthStatus::Unhealthy("configured to fail".into()))
        } else {
            Ok(HealthStatus::Healthy)
        }
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, FrontdeskError> {
        self.prompts.lock().await.push(prompt.to_string());

        if self.fail {
            return Err(FrontdeskError::Generator {
                message: "mock generator configured to fail".into(),
                source: None,
            });
        }

        Ok(self
            .responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| "mock reply".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn responses_pop_in_fifo_order() {
        let generator = MockGenerator::with_responses(vec!["first", "second"]);
        assert_eq!(generator.generate("p1").await.unwrap(), "first");
        assert_eq!(generator.generate("p2").await.unwrap(), "second");
        assert_eq!(generator.generate("p3").await.unwrap(), "mock reply");
    }

    #[tokio::test]
    async fn prompts_are_recorded() {
        let generator = MockGenerator::new();
        generator.generate("hello").await.unwrap();
        assert_eq!(generator.prompts().await, vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn failing_generator_errors() {
        let generator = MockGenerator::failing();
        assert!(generator.generate("anything").await.is_err());
    }
}
