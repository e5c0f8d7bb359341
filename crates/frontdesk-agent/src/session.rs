// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-user support session: one conversation, one memory, one
//! escalation engine, and the turn loop tying them together.
//!
//! `handle_message` is deliberately infallible. Capability failures
//! (generation, retrieval, storage) degrade the reply instead of surfacing
//! an error to the user; only the failed-reply streak records that anything
//! went wrong.

use std::sync::Arc;

use frontdesk_config::FrontdeskConfig;
use frontdesk_core::traits::{Generator, KnowledgeRetriever, LongTermMemory, Passage};
use frontdesk_core::types::{Message, Priority, Role, SessionId, TicketId};
use frontdesk_escalation::{
    priority_for_reason, EscalationEngine, EscalationLevel, REASON_FAILED_REPLIES,
    REASON_REPEATED_INTENT,
};
use frontdesk_memory::ConversationMemory;
use frontdesk_tickets::TicketStore;
use tracing::{debug, info, warn};

use crate::failure::is_failure_indicator;
use crate::prompt;
use crate::tools::{builtin_registry, ToolRegistry};

/// Reply used when a capability fails mid-turn. The phrasing intentionally
/// contains a failure indicator so a degraded turn also advances the
/// failed-reply streak.
pub const FALLBACK_REPLY: &str = "Sorry, I'm having trouble responding right now.";

/// Fixed reply once a human agent has taken over the conversation.
pub const TAKEOVER_REPLY: &str =
    "A human support agent is handling your issue. Please wait for their response.";

/// The result of a single conversation turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// The text shown to the user.
    pub reply: String,
    /// True if this turn escalated (or the session was already taken over).
    pub escalated: bool,
    /// Ticket created by this turn, if escalation succeeded in filing one.
    pub ticket_id: Option<TicketId>,
    /// Knowledge passages that informed the reply.
    pub sources: Vec<Passage>,
}

impl TurnOutcome {
    fn reply_only(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            escalated: false,
            ticket_id: None,
            sources: Vec::new(),
        }
    }
}

/// A single user's support conversation.
pub struct SupportSession {
    session_id: SessionId,
    user_id: String,
    memory: ConversationMemory,
    engine: EscalationEngine,
    generator: Arc<dyn Generator>,
    retriever: Arc<dyn KnowledgeRetriever>,
    longterm: Arc<dyn LongTermMemory>,
    tools: ToolRegistry,
    small_talk: Vec<String>,
    failed_reply_threshold: u32,
    top_k: usize,
    memory_top_k: usize,
}

impl SupportSession {
    /// Builds a session from configuration plus injected capabilities.
    pub fn new(
        config: &FrontdeskConfig,
        user_id: impl Into<String>,
        generator: Arc<dyn Generator>,
        retriever: Arc<dyn KnowledgeRetriever>,
        longterm: Arc<dyn LongTermMemory>,
        tickets: Arc<TicketStore>,
    ) -> Self {
        let session_id = SessionId(uuid::Uuid::new_v4().to_string());
        let user_id = user_id.into();
        info!(session = %session_id, user = %user_id, "support session started");
        let tools = builtin_registry(tickets, Arc::clone(&retriever), Arc::clone(&generator));
        Self {
            session_id,
            user_id,
            memory: ConversationMemory::from_config(&config.memory),
            engine: EscalationEngine::new(config.escalation.repeat_threshold),
            generator,
            retriever,
            longterm,
            tools,
            small_talk: config
                .agent
                .small_talk
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
            failed_reply_threshold: config.escalation.failed_reply_threshold,
            top_k: config.retrieval.top_k,
            memory_top_k: config.retrieval.memory_top_k,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Read access to the conversation state, mainly for inspection and
    /// admin surfaces.
    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    /// Forgets the conversation. Short-term history, intent counts, failure
    /// streak, SLA clock, and the takeover flag all reset; long-term facts
    /// survive.
    pub fn clear(&mut self) {
        self.memory.clear();
        info!(session = %self.session_id, "conversation cleared");
    }

    /// Runs one conversation turn.
    pub async fn handle_message(&mut self, text: &str) -> TurnOutcome {
        let message = text.trim();

        if self.memory.human_takeover() {
            return TurnOutcome {
                reply: TAKEOVER_REPLY.to_string(),
                escalated: true,
                ticket_id: None,
                sources: Vec::new(),
            };
        }

        // Identity fast paths run before classification so a name statement
        // never pollutes intent counts.
        if let Some(name) = self.memory.names().extract(message) {
            return self.greet_by_name(name).await;
        }
        if self.memory.names().is_name_query(message) {
            return self.answer_name_query().await;
        }

        let intent = self.memory.add_user_message(message);
        debug!(session = %self.session_id, %intent, "message classified");

        // Advisory only: a breached window never forces escalation by itself.
        if self.memory.is_sla_breached() {
            debug!(session = %self.session_id, "sla window exceeded");
        }

        if self.memory.should_store_long_term(intent) {
            self.store_fact(&self.memory.extract_memory_text(message), intent)
                .await;
        }

        let decision = self.engine.evaluate(message, &self.memory);
        if decision.level == EscalationLevel::High {
            // Repeated intent is always urgent; otherwise priority is read
            // off the reason text, defaulting to LOW.
            let priority = if decision.reason == REASON_REPEATED_INTENT {
                Priority::High
            } else {
                priority_for_reason(decision.reason)
            };
            return self.escalate(decision.reason, priority).await;
        }

        let reply = if self.is_small_talk(message) {
            self.generate_or_fallback(message).await
        } else {
            self.answer_with_context(message).await
        };

        if is_failure_indicator(&reply.0) {
            self.memory.mark_failed_reply();
        } else {
            self.memory.reset_failed_replies();
        }

        if self.memory.failed_reply_streak() >= self.failed_reply_threshold {
            return self.escalate(REASON_FAILED_REPLIES, Priority::High).await;
        }

        self.memory.add_agent_message(&reply.0);
        TurnOutcome {
            reply: reply.0,
            escalated: false,
            ticket_id: None,
            sources: reply.1,
        }
    }

    /// Exact lowercase match only. "hello!" is a real message and goes
    /// through the full pipeline.
    fn is_small_talk(&self, message: &str) -> bool {
        let normalized = message.to_lowercase();
        self.small_talk.iter().any(|s| *s == normalized)
    }

    async fn greet_by_name(&mut self, name: String) -> TurnOutcome {
        self.store_fact(
            &format!("User name is {name}"),
            frontdesk_intent::IntentLabel::Identity,
        )
        .await;
        let reply = format!("Nice to meet you, {name}!");
        self.memory.add_agent_message(&reply);
        TurnOutcome::reply_only(reply)
    }

    async fn answer_name_query(&mut self) -> TurnOutcome {
        let reply = match self.longterm.recall("user name", 1).await {
            Ok(facts) => match facts.first() {
                Some(fact) => {
                    let name = fact.strip_prefix("User name is ").unwrap_or(fact);
                    format!("Your name is {name}.")
                }
                None => "You haven't told me your name yet.".to_string(),
            },
            Err(error) => {
                warn!(session = %self.session_id, %error, "name recall failed");
                "You haven't told me your name yet.".to_string()
            }
        };
        self.memory.add_agent_message(&reply);
        TurnOutcome::reply_only(reply)
    }

    /// Long-term storage is fire-and-forget: a missed write must never
    /// break the turn.
    async fn store_fact(&self, text: &str, intent: frontdesk_intent::IntentLabel) {
        let mut metadata = std::collections::BTreeMap::new();
        metadata.insert("intent".to_string(), intent.to_string());
        metadata.insert(
            "timestamp".to_string(),
            chrono::Utc::now().to_rfc3339(),
        );
        if let Err(error) = self.longterm.store(text, metadata).await {
            warn!(session = %self.session_id, %error, "long-term store failed");
        }
    }

    async fn generate_or_fallback(&self, prompt_text: &str) -> (String, Vec<Passage>) {
        match self.generator.generate(prompt_text).await {
            Ok(reply) => (reply, Vec::new()),
            Err(error) => {
                warn!(session = %self.session_id, %error, "generation failed");
                (FALLBACK_REPLY.to_string(), Vec::new())
            }
        }
    }

    async fn answer_with_context(&self, message: &str) -> (String, Vec<Passage>) {
        let facts = match self.longterm.recall(message, self.memory_top_k).await {
            Ok(facts) => facts,
            Err(error) => {
                warn!(session = %self.session_id, %error, "memory recall failed");
                return (FALLBACK_REPLY.to_string(), Vec::new());
            }
        };
        let passages = match self.retriever.search(message, self.top_k).await {
            Ok(passages) => passages,
            Err(error) => {
                warn!(session = %self.session_id, %error, "knowledge search failed");
                return (FALLBACK_REPLY.to_string(), Vec::new());
            }
        };

        let full_prompt = prompt::build_support_prompt(
            &prompt::format_memory_context(&facts),
            &self.memory.formatted_history(),
            &prompt::format_knowledge_context(&passages),
            message,
        );
        let (reply, _) = self.generate_or_fallback(&full_prompt).await;
        (reply, passages)
    }

    /// Files a ticket through the ticket tool, flips the session into human
    /// takeover, and composes the handoff reply. Snapshot is taken before
    /// the handoff reply is appended so the ticket carries only what the
    /// user and agent actually exchanged.
    async fn escalate(&mut self, reason: &'static str, priority: Priority) -> TurnOutcome {
        let conversation = self.memory.snapshot();
        let ticket_id = self.file_ticket(reason, priority, &conversation).await;
        self.log_handoff_summary(reason, priority, &conversation)
            .await;

        self.memory.begin_human_takeover();
        info!(
            session = %self.session_id,
            reason,
            %priority,
            ticket = ticket_id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            "conversation escalated"
        );

        let ticket_line = ticket_id
            .as_ref()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "unavailable".to_string());
        let reply = format!(
            "This issue requires human assistance.\n\
             Reason: {reason}\n\
             Priority: {priority}\n\
             Ticket ID: {ticket_line}"
        );
        self.memory.add_agent_message(&reply);

        TurnOutcome {
            reply,
            escalated: true,
            ticket_id,
            sources: Vec::new(),
        }
    }

    /// Ticket creation goes through the ticket tool rather than the store
    /// directly. A failed filing degrades to a ticket-less handoff.
    async fn file_ticket(
        &self,
        reason: &str,
        priority: Priority,
        conversation: &[Message],
    ) -> Option<TicketId> {
        let Some(tool) = self.tools.get("ticket") else {
            warn!(session = %self.session_id, "ticket tool not registered");
            return None;
        };
        let input = serde_json::json!({
            "user_id": self.user_id,
            "reason": reason,
            "priority": priority.to_string(),
            "conversation": conversation,
        });
        match tool.invoke(input).await {
            Ok(output) if !output.is_error => Some(TicketId(output.content)),
            Ok(output) => {
                warn!(session = %self.session_id, detail = %output.content, "ticket creation rejected");
                None
            }
            Err(error) => {
                warn!(session = %self.session_id, %error, "ticket creation failed");
                None
            }
        }
    }

    /// Writes the handoff summary into the log so the human agent picking
    /// the ticket up sees the issue at a glance.
    async fn log_handoff_summary(
        &self,
        reason: &str,
        priority: Priority,
        conversation: &[Message],
    ) {
        let Some(tool) = self.tools.get("escalation_summary") else {
            return;
        };
        let issue = conversation
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default();
        let input = serde_json::json!({
            "user_message": issue,
            "reason": reason,
            "priority": priority.to_string(),
        });
        match tool.invoke(input).await {
            Ok(output) => {
                info!(session = %self.session_id, summary = %output.content, "handoff summary prepared");
            }
            Err(error) => {
                warn!(session = %self.session_id, %error, "handoff summary failed");
            }
        }
    }
}
