// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock knowledge retriever returning canned passages.

use async_trait::async_trait;

use frontdesk_core::error::FrontdeskError;
use frontdesk_core::traits::{Capability, KnowledgeRetriever, Passage};
use frontdesk_core::types::{CapabilityType, HealthStatus};

/// A retriever that returns the same passages for every query.
pub struct MockRetriever {
    passages: Vec<Passage>,
    fail: bool,
}

impl MockRetriever {
    /// Create a retriever with no corpus (every search returns empty).
    pub fn empty() -> Self {
        Self {
            passages: Vec::new(),
            fail: false,
        }
    }

    /// Create a retriever pre-loaded with canned passages.
    pub fn with_passages(passages: Vec<Passage>) -> Self {
        Self {
            passages,
            fail: false,
        }
    }

    /// Create a retriever whose every search fails.
    pub fn failing() -> Self {
        Self {
            passages: Vec::new(),
            fail: true,
        }
    }

    /// Convenience: a single-passage corpus.
    pub fn single(text: &str, source: &str, page: u32) -> Self {
        Self::with_passages(vec![Passage {
            text: text.to_string(),
            source: source.to_string(),
            page: Some(page),
        }])
    }
}

#[async_trait]
impl Capability for MockRetriever {
    fn name(&self) -> &str {
        "mock-retriever"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn capability_type(&self) -> CapabilityType {
        CapabilityType::Knowledge
    }

    async fn health_check(&self) -> Result<HealthStatus, FrontdeskError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl KnowledgeRetriever for MockRetriever {
    async fn search(&self, _query: &str, k: usize) -> Result<Vec<Passage>, FrontdeskError> {
        if self.fail {
            return Err(FrontdeskError::Retrieval {
                message: "mock retriever configured to fail".into(),
                source: None,
            });
        }
        Ok(self.passages.iter().take(k).cloned().collect())
    }
}
