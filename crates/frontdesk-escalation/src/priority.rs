// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ticket priority assignment from an escalation reason.
//!
//! Priority is separate from the escalation level: the level decides
//! whether a human takes over, the priority decides how urgently the
//! resulting ticket is triaged.

use frontdesk_core::types::Priority;

/// Reason keywords that force HIGH priority.
const HIGH_PRIORITY_TERMS: &[&str] = &["fraud", "scam", "hacked"];

/// Reason keywords that assign MEDIUM priority.
const MEDIUM_PRIORITY_TERMS: &[&str] = &["refund", "billing", "payment"];

/// Classify a ticket priority from the escalation reason text.
///
/// Unmatched reasons default to LOW, the safe choice: an escalation whose
/// reason names no sensitive keyword still reaches a human, just without
/// jumping the queue.
pub fn priority_for_reason(reason: &str) -> Priority {
    let reason = reason.to_lowercase();

    if HIGH_PRIORITY_TERMS.iter().any(|t| reason.contains(t)) {
        return Priority::High;
    }
    if MEDIUM_PRIORITY_TERMS.iter().any(|t| reason.contains(t)) {
        return Priority::Medium;
    }
    Priority::Low
}
