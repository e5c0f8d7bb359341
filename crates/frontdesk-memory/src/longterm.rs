// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process long-term memory with keyword-overlap recall.
//!
//! The real deployment points the [`LongTermMemory`] trait at a vector
//! store; this implementation ranks stored facts by lowercased token
//! overlap with the query. Deterministic, dependency-free, and good enough
//! for the identity fast-path ("user name" reliably hits "User name is X").

use std::collections::BTreeMap;

use async_trait::async_trait;
use frontdesk_core::error::FrontdeskError;
use frontdesk_core::traits::{Capability, LongTermMemory};
use frontdesk_core::types::{CapabilityType, HealthStatus};
use tokio::sync::Mutex;
use tracing::debug;

struct FactEntry {
    text: String,
    #[allow(dead_code)]
    metadata: BTreeMap<String, String>,
    /// Insertion order, used as the tie-breaker so newer facts win.
    seq: u64,
}

/// Keyword-scored fact store for a single user.
pub struct KeywordMemoryStore {
    user_id: String,
    facts: Mutex<Vec<FactEntry>>,
}

impl KeywordMemoryStore {
    /// Creates an empty store for the given user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            facts: Mutex::new(Vec::new()),
        }
    }

    /// The user this store belongs to.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Number of stored facts.
    pub async fn len(&self) -> usize {
        self.facts.lock().await.len()
    }

    /// True when no facts are stored.
    pub async fn is_empty(&self) -> bool {
        self.facts.lock().await.is_empty()
    }
}

/// Count how many distinct lowercased query tokens appear in `text`.
fn overlap_score(query: &str, text: &str) -> usize {
    let text_lower = text.to_lowercase();
    let mut seen: Vec<&str> = Vec::new();
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|token| {
            if seen.contains(token) {
                return false;
            }
            seen.push(token);
            text_lower.contains(token)
        })
        .count()
}

#[async_trait]
impl Capability for KeywordMemoryStore {
    fn name(&self) -> &str {
        "keyword-memory"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn capability_type(&self) -> CapabilityType {
        CapabilityType::Memory
    }

    async fn health_check(&self) -> Result<HealthStatus, FrontdeskError> {
        Ok(HealthStatus::Healthy)
    }
}

#[async_trait]
impl LongTermMemory for KeywordMemoryStore {
    async fn store(
        &self,
        text: &str,
        metadata: BTreeMap<String, String>,
    ) -> Result<(), FrontdeskError> {
        let mut facts = self.facts.lock().await;
        let seq = facts.len() as u64;
        debug!(user_id = %self.user_id, seq, "storing long-term fact");
        facts.push(FactEntry {
            text: text.to_string(),
            metadata,
            seq,
        });
        Ok(())
    }

    async fn recall(&self, query: &str, k: usize) -> Result<Vec<String>, FrontdeskError> {
        let facts = self.facts.lock().await;
        let mut scored: Vec<(usize, u64, &str)> = facts
            .iter()
            .map(|f| (overlap_score(query, &f.text), f.seq, f.text.as_str()))
            .filter(|(score, _, _)| *score > 0)
            .collect();
        // Highest overlap first; newer facts break ties.
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));
        Ok(scored
            .into_iter()
            .take(k)
            .map(|(_, _, text)| text.to_string())
            .collect())
    }
}
