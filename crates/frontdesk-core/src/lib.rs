// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Frontdesk support-agent orchestrator.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common domain types used throughout the Frontdesk workspace. External
//! capabilities (text generation, knowledge retrieval, long-term memory)
//! implement the traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::FrontdeskError;
pub use types::{
    CapabilityType, HealthStatus, Message, Priority, Role, SessionId, Ticket, TicketId,
    TicketStatus,
};

// Re-export all capability traits at crate root.
pub use traits::{Capability, Generator, KnowledgeRetriever, LongTermMemory, Passage};
