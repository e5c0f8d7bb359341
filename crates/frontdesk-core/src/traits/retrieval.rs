// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Knowledge retrieval capability trait for similarity-search backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::FrontdeskError;
use crate::traits::capability::Capability;

/// A ranked passage returned by knowledge retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// The passage text.
    pub text: String,
    /// Source document identifier.
    pub source: String,
    /// Page within the source document, when known.
    pub page: Option<u32>,
}

/// Capability for semantic retrieval over an ingested knowledge corpus.
///
/// How the corpus is built and embedded is out of scope for the core; the
/// orchestrator only consumes ranked passages.
#[async_trait]
pub trait KnowledgeRetriever: Capability {
    /// Returns up to `k` passages ranked by relevance to `query`.
    async fn search(&self, query: &str, k: usize) -> Result<Vec<Passage>, FrontdeskError>;
}
