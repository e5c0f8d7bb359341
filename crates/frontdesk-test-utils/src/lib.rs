// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Frontdesk integration tests.
//!
//! Provides mock implementations of the external capability traits so the
//! orchestrator can be exercised deterministically without a model, a
//! vector store, or a network.

pub mod mock_generator;
pub mod mock_retriever;

pub use mock_generator::MockGenerator;
pub use mock_retriever::MockRetriever;
