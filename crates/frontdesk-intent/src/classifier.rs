// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic intent classification for support messages.
//!
//! Classifies user messages into coarse intent labels using zero-cost
//! keyword rules. No LLM pre-call, no network, no latency. The classifier
//! is total: every message gets a label, with `General` as the fallback.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::identity::NameExtractor;

/// Coarse intent labels driving escalation and long-term memory decisions.
///
/// Evaluated in fixed priority order; the first matching label wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentLabel {
    /// Message asserts the user's name ("my name is X").
    Identity,
    /// Refund mention with a demand qualifier ("want", "now", "immediately").
    RefundDemand,
    /// Refund mention without demand qualifiers.
    RefundInfo,
    /// Complaint or anger vocabulary.
    Complaint,
    /// Request for a human agent.
    HumanRequest,
    /// Everything else.
    General,
}

/// Demand qualifiers that upgrade a refund mention to `RefundDemand`.
const REFUND_DEMAND_QUALIFIERS: &[&str] = &["want", "now", "immediately"];

/// Complaint vocabulary (contains, case-insensitive).
const COMPLAINT_TERMS: &[&str] = &["complaint", "angry", "not happy", "bad", "worst"];

/// Human-request vocabulary (contains, case-insensitive).
const HUMAN_REQUEST_TERMS: &[&str] = &["human", "agent", "support"];

/// Deterministic, stateless intent classifier.
///
/// Owns a [`NameExtractor`] so the identity check shares one set of
/// compiled patterns with the agent's fast-path.
pub struct IntentClassifier {
    names: NameExtractor,
}

impl IntentClassifier {
    /// Create a classifier with freshly compiled identity patterns.
    pub fn new() -> Self {
        Self {
            names: NameExtractor::new(),
        }
    }

    /// Borrow the identity name extractor.
    pub fn names(&self) -> &NameExtractor {
        &self.names
    }

    /// Classify a message into an intent label. Never fails.
    pub fn classify(&self, message: &str) -> IntentLabel {
        let lower = message.to_lowercase();

        if self.names.extract(message).is_some() {
            return IntentLabel::Identity;
        }

        if lower.contains("refund") {
            if REFUND_DEMAND_QUALIFIERS.iter().any(|q| lower.contains(q)) {
                return IntentLabel::RefundDemand;
            }
            return IntentLabel::RefundInfo;
        }

        if COMPLAINT_TERMS.iter().any(|t| lower.contains(t)) {
            return IntentLabel::Complaint;
        }

        if HUMAN_REQUEST_TERMS.iter().any(|t| lower.contains(t)) {
            return IntentLabel::HumanRequest;
        }

        IntentLabel::General
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_refund_demand() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("I want a refund now"), IntentLabel::RefundDemand);
        assert_eq!(
            c.classify("refund immediately please"),
            IntentLabel::RefundDemand
        );
    }

    #[test]
    fn classify_refund_info_without_qualifier() {
        let c = IntentClassifier::new();
        assert_eq!(
            c.classify("What is your refund policy?"),
            IntentLabel::RefundInfo
        );
    }

    #[test]
    fn classify_complaint_terms() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("I am not happy with this"), IntentLabel::Complaint);
        assert_eq!(c.classify("worst service ever"), IntentLabel::Complaint);
    }

    #[test]
    fn classify_human_request() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("let me talk to a human"), IntentLabel::HumanRequest);
    }

    #[test]
    fn classify_identity_wins_over_later_labels() {
        let c = IntentClassifier::new();
        // "support" would match HumanRequest, but identity is evaluated first.
        assert_eq!(
            c.classify("my name is Rahim, I contacted support before"),
            IntentLabel::Identity
        );
    }

    #[test]
    fn classify_general_fallback() {
        let c = IntentClassifier::new();
        assert_eq!(c.classify("what time do you open?"), IntentLabel::General);
        assert_eq!(c.classify(""), IntentLabel::General);
    }

    #[test]
    fn stoplist_words_do_not_become_identity() {
        let c = IntentClassifier::new();
        // "I am fine" matches the "i am X" pattern but "fine" is stoplisted,
        // so this falls through to General.
        assert_eq!(c.classify("I am fine"), IntentLabel::General);
    }

    #[test]
    fn label_display_matches_persisted_form() {
        assert_eq!(IntentLabel::RefundDemand.to_string(), "REFUND_DEMAND");
        assert_eq!(IntentLabel::HumanRequest.to_string(), "HUMAN_REQUEST");
        assert_eq!(IntentLabel::General.to_string(), "GENERAL");
    }
}
