// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Escalation rule engine for the Frontdesk orchestrator.
//!
//! Decides, per message, whether the conversation should be handed to a
//! human (the level) and how urgently the resulting ticket gets triaged
//! (the priority). Plain regex tiers plus intent counting, no model in the loop.

pub mod priority;
pub mod rules;

pub use priority::priority_for_reason;
pub use rules::{
    EscalationDecision, EscalationEngine, EscalationLevel, REASON_FAILED_REPLIES,
    REASON_GENERAL, REASON_HIGH_PATTERN, REASON_LOW_PATTERN, REASON_MEDIUM_PATTERN,
    REASON_REPEATED_INTENT,
};
