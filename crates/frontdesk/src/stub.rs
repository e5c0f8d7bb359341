// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Offline capability implementations for the interactive shell.
//!
//! Frontdesk ships without a bundled language model or document corpus.
//! The shell wires these stubs in so the orchestration itself (intent
//! tracking, escalation, tickets, memory) is fully usable out of the box;
//! deployments swap in real [`Generator`] and [`KnowledgeRetriever`]
//! implementations.

use async_trait::async_trait;
use frontdesk_core::error::FrontdeskError;
use frontdesk_core::traits::{Capability, Generator, KnowledgeRetriever, Passage};
use frontdesk_core::types::{CapabilityType, HealthStatus};

/// Generator that acknowledges the question without answering it.
pub struct StubGenerator;

#[async_trait]
impl Capability for StubGenerator {
    fn name(&self) -> &str {
        "stub-generator"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn capability_type(&self) -> CapabilityType {
        CapabilityType::Generator
    }

    async fn health_check(&self) -> Result<HealthStatus, FrontdeskError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl Generator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, FrontdeskError> {
        // The shell prompt ends with the raw question for small talk, or the
        // assembled support prompt otherwise. Either way, acknowledge it.
        let _ = prompt;
        Ok(
            "Thanks for reaching out. I've noted your question and our team \
             will make sure it gets answered."
                .to_string(),
        )
    }
}

/// Retriever over an empty corpus.
pub struct NullRetriever;

#[async_trait]
impl Capability for NullRetriever {
    fn name(&self) -> &str {
        "null-retriever"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn capability_type(&self) -> CapabilityType {
        CapabilityType::Knowledge
    }

    async fn health_check(&self) -> Result<HealthStatus, FrontdeskError> {
        Ok(HealthStatus::Degraded("no corpus loaded".to_string()))
    }
}

#[async_trait]
impl KnowledgeRetriever for NullRetriever {
    async fn search(&self, _query: &str, _k: usize) -> Result<Vec<Passage>, FrontdeskError> {
        Ok(Vec::new())
    }
}
