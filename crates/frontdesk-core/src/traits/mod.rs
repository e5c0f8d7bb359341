// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability trait definitions consumed by the turn controller.

pub mod capability;
pub mod generator;
pub mod memory;
pub mod retrieval;

pub use capability::Capability;
pub use generator::Generator;
pub use memory::LongTermMemory;
pub use retrieval::{KnowledgeRetriever, Passage};
