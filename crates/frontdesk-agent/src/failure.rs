// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Low-confidence reply detection.
//!
//! Kept as an explicit classification step so it is independently testable
//! and replaceable with a confidence score later.

/// Substrings marking a generated reply as unhelpful (case-insensitive).
///
/// The fixed fallback reply used on generator errors contains "having
/// trouble", so capability failures advance the streak through the same
/// check as low-confidence model output.
const FAILURE_INDICATORS: &[&str] = &[
    "i don't know",
    "i do not know",
    "not sure",
    "cannot help",
    "can't help",
    "no information",
    "unable to help",
    "having trouble",
];

/// Whether a generated reply should count against the failure streak.
pub fn is_failure_indicator(reply: &str) -> bool {
    let lower = reply.to_lowercase();
    FAILURE_INDICATORS.iter().any(|i| lower.contains(i))
}
