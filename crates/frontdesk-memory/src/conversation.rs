// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-session conversation memory.
//!
//! Tracks the bounded message history, intent tally, recent-intent ring,
//! failed-reply streak, SLA clock, and the human-takeover flag. Single
//! writer per session: the owning turn controller is the only mutator.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use frontdesk_config::model::MemoryConfig;
use frontdesk_core::types::{Message, Role};
use frontdesk_intent::{IntentClassifier, IntentLabel, NameExtractor};
use tracing::debug;

/// Intents worth promoting to long-term memory.
const LONG_TERM_INTENTS: &[IntentLabel] = &[
    IntentLabel::RefundDemand,
    IntentLabel::Complaint,
    IntentLabel::HumanRequest,
    IntentLabel::Identity,
];

/// Bounded short-term memory plus escalation counters for one session.
///
/// Invariants: `history.len() <= max_history` with FIFO eviction; intent
/// counts never decrease except on [`clear`](Self::clear); the SLA flag is
/// advisory and never destroys state.
pub struct ConversationMemory {
    max_history: usize,
    recent_capacity: usize,
    sla: Duration,
    classifier: IntentClassifier,
    history: VecDeque<Message>,
    intent_counts: HashMap<IntentLabel, u32>,
    recent_intents: VecDeque<IntentLabel>,
    failed_reply_streak: u32,
    sla_started_at: Instant,
    human_takeover: bool,
}

impl ConversationMemory {
    /// Creates conversation memory with explicit window sizes and SLA budget.
    pub fn new(max_history: usize, recent_capacity: usize, sla: Duration) -> Self {
        Self {
            max_history,
            recent_capacity,
            sla,
            classifier: IntentClassifier::new(),
            history: VecDeque::with_capacity(max_history),
            intent_counts: HashMap::new(),
            recent_intents: VecDeque::with_capacity(recent_capacity),
            failed_reply_streak: 0,
            sla_started_at: Instant::now(),
            human_takeover: false,
        }
    }

    /// Creates conversation memory from the `[memory]` config section.
    pub fn from_config(config: &MemoryConfig) -> Self {
        Self::new(
            config.max_history,
            config.recent_intents,
            Duration::from_secs(config.sla_seconds),
        )
    }

    /// Appends a user message, classifies it, and updates the intent tally
    /// and recent-intent ring. Returns the label for the caller's decision
    /// logic.
    pub fn add_user_message(&mut self, content: &str) -> IntentLabel {
        self.push(Message::now(Role::User, content));

        let intent = self.classifier.classify(content);
        *self.intent_counts.entry(intent).or_insert(0) += 1;

        if self.recent_intents.len() == self.recent_capacity {
            self.recent_intents.pop_front();
        }
        self.recent_intents.push_back(intent);

        debug!(intent = %intent, count = self.intent_counts[&intent], "classified user message");
        intent
    }

    /// Appends an assistant message. No intent side effects.
    pub fn add_agent_message(&mut self, content: &str) {
        self.push(Message::now(Role::Assistant, content));
    }

    /// Appends an admin (human agent) message.
    pub fn add_admin_message(&mut self, content: &str) {
        self.push(Message::now(Role::Admin, content));
    }

    fn push(&mut self, message: Message) {
        if self.history.len() == self.max_history {
            self.history.pop_front();
        }
        self.history.push_back(message);
    }

    /// A point-in-time copy of the history, oldest first. Used as the
    /// conversation snapshot attached to escalation tickets.
    pub fn snapshot(&self) -> Vec<Message> {
        self.history.iter().cloned().collect()
    }

    /// Number of messages currently retained.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// True when no messages are retained.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// History rendered as `ROLE: content` lines for prompt assembly.
    pub fn formatted_history(&self) -> String {
        self.history
            .iter()
            .map(|m| format!("{}: {}", m.role.to_string().to_uppercase(), m.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// How many times the given intent has been seen since the last clear.
    pub fn intent_count(&self, intent: IntentLabel) -> u32 {
        self.intent_counts.get(&intent).copied().unwrap_or(0)
    }

    /// The last few intent labels, oldest first. Diagnostic only.
    pub fn recent_intents(&self) -> Vec<IntentLabel> {
        self.recent_intents.iter().copied().collect()
    }

    /// Records a low-confidence generated reply.
    pub fn mark_failed_reply(&mut self) {
        self.failed_reply_streak += 1;
    }

    /// Resets the streak after a useful generated reply.
    pub fn reset_failed_replies(&mut self) {
        self.failed_reply_streak = 0;
    }

    /// Current count of consecutive failed generated replies.
    pub fn failed_reply_streak(&self) -> u32 {
        self.failed_reply_streak
    }

    /// Whether the conversation has exceeded its SLA time budget.
    /// Advisory only: a breach never forces escalation by itself.
    pub fn is_sla_breached(&self) -> bool {
        self.sla_started_at.elapsed() >= self.sla
    }

    /// Restarts the SLA clock.
    pub fn reset_sla(&mut self) {
        self.sla_started_at = Instant::now();
    }

    /// Whether a human has taken over this conversation.
    pub fn human_takeover(&self) -> bool {
        self.human_takeover
    }

    /// Flips the conversation into human-handled mode. Irreversible except
    /// by [`clear`](Self::clear).
    pub fn begin_human_takeover(&mut self) {
        self.human_takeover = true;
    }

    /// Whether a message with this intent should be promoted to long-term
    /// memory.
    pub fn should_store_long_term(&self, intent: IntentLabel) -> bool {
        LONG_TERM_INTENTS.contains(&intent)
    }

    /// The text stored to long-term memory for an eligible message.
    pub fn extract_memory_text(&self, message: &str) -> String {
        message.trim().to_string()
    }

    /// Borrow the identity fast-path shared with the classifier.
    pub fn names(&self) -> &NameExtractor {
        self.classifier.names()
    }

    /// Wipes history, tally, ring, and failure streak; restarts the SLA
    /// clock and drops the human-takeover flag. Used for session restart.
    pub fn clear(&mut self) {
        self.history.clear();
        self.intent_counts.clear();
        self.recent_intents.clear();
        self.failed_reply_streak = 0;
        self.human_takeover = false;
        self.reset_sla();
    }
}
