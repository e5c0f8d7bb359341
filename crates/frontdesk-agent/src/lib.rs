// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Frontdesk turn controller: per-user support sessions that classify,
//! remember, retrieve, generate, and escalate.

pub mod failure;
pub mod prompt;
pub mod session;
pub mod tools;

pub use failure::is_failure_indicator;
pub use session::{SupportSession, TurnOutcome, FALLBACK_REPLY, TAKEOVER_REPLY};
pub use tools::{builtin_registry, Tool, ToolOutput, ToolRegistry};
