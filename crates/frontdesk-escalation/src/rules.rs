// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Escalation level decision: repeated-intent rule plus regex pattern tiers.
//!
//! Keyword matching is intentionally simple and auditable. False negatives
//! are acceptable (repeated intent and repeated generation failure act as
//! safety nets); false positives on HIGH cause unwanted human handoff, so
//! HIGH patterns are specific multi-word phrases, not single ambiguous
//! words.

use frontdesk_intent::IntentLabel;
use frontdesk_memory::ConversationMemory;
use regex::Regex;
use strum::Display;
use tracing::debug;

/// Reason attached when the repeated-intent rule fires.
pub const REASON_REPEATED_INTENT: &str = "repeated complaint or refund demand";
/// Reason attached when a HIGH pattern matches.
pub const REASON_HIGH_PATTERN: &str = "complaint, demand, or sensitive issue detected";
/// Reason attached when a MEDIUM pattern matches.
pub const REASON_MEDIUM_PATTERN: &str = "sensitive topic - explain policy first";
/// Reason attached when a LOW pattern matches.
pub const REASON_LOW_PATTERN: &str = "informational query";
/// Reason attached when nothing matches.
pub const REASON_GENERAL: &str = "general query";
/// Reason attached when the failed-reply safety net fires.
pub const REASON_FAILED_REPLIES: &str = "multiple failed AI responses";

/// HIGH tier: human-request phrases and refund/complaint/anger/legal/
/// fraud/security terms. Immediate human escalation.
const HIGH_PATTERNS: &[&str] = &[
    r"\btalk to human\b",
    r"\breal agent\b",
    r"\bhuman agent\b",
    r"\bi want a refund\b",
    r"\brefund denied\b",
    r"\bcomplaint\b",
    r"\bnot happy\b",
    r"\bangry\b",
    r"\blegal\b",
    r"\bscam\b",
    r"\bfraud\b",
    r"\bhacked\b",
    r"\bbad service\b",
    r"\bworst experience\b",
];

/// MEDIUM tier: refund-process questions and billing/payment issues.
/// Explain policy first, then hand off if needed.
const MEDIUM_PATTERNS: &[&str] = &[
    r"\bhow can i get a refund\b",
    r"\brefund process\b",
    r"\brefund procedure\b",
    r"\brefund steps\b",
    r"\bpayment issue\b",
    r"\bbilling issue\b",
];

/// LOW tier: informational queries that never escalate.
const LOW_PATTERNS: &[&str] = &[
    r"\brefund policy\b",
    r"\brefund rules\b",
    r"\brefund terms\b",
    r"\babout refunds\b",
    r"\bwhat does.*refund\b",
    r"\bhow does.*refund\b",
    r"\bwhat is this document about\b",
    r"\bsummarize\b",
];

/// Escalation levels ordered by urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum EscalationLevel {
    Low,
    Medium,
    High,
}

/// The outcome of an escalation evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscalationDecision {
    pub level: EscalationLevel,
    pub reason: &'static str,
}

/// Rule engine deciding the escalation level for each message.
pub struct EscalationEngine {
    repeat_threshold: u32,
    high: Vec<Regex>,
    medium: Vec<Regex>,
    low: Vec<Regex>,
}

impl EscalationEngine {
    /// Compiles the pattern tiers. `repeat_threshold` is the intent count
    /// at which the repeated-intent rule fires (default 2).
    pub fn new(repeat_threshold: u32) -> Self {
        let compile = |patterns: &[&str]| {
            patterns
                .iter()
                .map(|p| {
                    Regex::new(&format!("(?i){p}"))
                        .expect("escalation patterns are compile-time constants")
                })
                .collect()
        };
        Self {
            repeat_threshold,
            high: compile(HIGH_PATTERNS),
            medium: compile(MEDIUM_PATTERNS),
            low: compile(LOW_PATTERNS),
        }
    }

    /// Full evaluation: the state-based repeated-intent rule has priority
    /// over the pattern rule; the first rule that fires wins.
    pub fn evaluate(&self, message: &str, memory: &ConversationMemory) -> EscalationDecision {
        if memory.intent_count(IntentLabel::RefundDemand) >= self.repeat_threshold
            || memory.intent_count(IntentLabel::Complaint) >= self.repeat_threshold
        {
            debug!(reason = REASON_REPEATED_INTENT, "repeated-intent rule fired");
            return EscalationDecision {
                level: EscalationLevel::High,
                reason: REASON_REPEATED_INTENT,
            };
        }

        self.evaluate_message(message)
    }

    /// Pattern-only evaluation, independent of conversation state.
    pub fn evaluate_message(&self, message: &str) -> EscalationDecision {
        if self.high.iter().any(|p| p.is_match(message)) {
            return EscalationDecision {
                level: EscalationLevel::High,
                reason: REASON_HIGH_PATTERN,
            };
        }

        if self.medium.iter().any(|p| p.is_match(message)) {
            return EscalationDecision {
                level: EscalationLevel::Medium,
                reason: REASON_MEDIUM_PATTERN,
            };
        }

        if self.low.iter().any(|p| p.is_match(message)) {
            return EscalationDecision {
                level: EscalationLevel::Low,
                reason: REASON_LOW_PATTERN,
            };
        }

        EscalationDecision {
            level: EscalationLevel::Low,
            reason: REASON_GENERAL,
        }
    }
}

impl Default for EscalationEngine {
    fn default() -> Self {
        Self::new(2)
    }
}
