// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation and long-term memory for the Frontdesk orchestrator.
//!
//! [`ConversationMemory`] is the per-session short-term state: bounded
//! history, intent tally, failure streak, SLA clock, takeover flag.
//! [`KeywordMemoryStore`] is the bundled in-process implementation of the
//! [`LongTermMemory`](frontdesk_core::LongTermMemory) capability trait.

pub mod conversation;
pub mod longterm;

pub use conversation::ConversationMemory;
pub use longterm::KeywordMemoryStore;
