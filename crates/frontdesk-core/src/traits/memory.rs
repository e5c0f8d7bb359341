// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Long-term memory capability trait for per-user fact storage and recall.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::FrontdeskError;
use crate::traits::capability::Capability;

/// Capability for durable per-user fact storage with similarity recall.
///
/// Storage is fire-and-forget from the turn controller's perspective: the
/// caller logs and discards errors, since a missed memory write must never
/// break a conversation turn.
#[async_trait]
pub trait LongTermMemory: Capability {
    /// Stores a fact with free-form string metadata (intent label, field
    /// name, timestamp).
    async fn store(
        &self,
        text: &str,
        metadata: BTreeMap<String, String>,
    ) -> Result<(), FrontdeskError>;

    /// Returns up to `k` stored facts ranked by relevance to `query`.
    async fn recall(&self, query: &str, k: usize) -> Result<Vec<String>, FrontdeskError>;
}
