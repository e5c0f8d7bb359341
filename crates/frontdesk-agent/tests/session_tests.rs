// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end turn controller tests with mocked capabilities and a real
//! on-disk ticket store.

use std::sync::Arc;

use frontdesk_agent::{SupportSession, FALLBACK_REPLY, TAKEOVER_REPLY};
use frontdesk_config::FrontdeskConfig;
use frontdesk_core::types::{Priority, Role, TicketStatus};
use frontdesk_escalation::priority_for_reason;
use frontdesk_memory::KeywordMemoryStore;
use frontdesk_test_utils::{MockGenerator, MockRetriever};
use frontdesk_tickets::TicketStore;
use tempfile::TempDir;

struct Harness {
    session: SupportSession,
    tickets: Arc<TicketStore>,
    _dir: TempDir,
}

async fn harness(generator: MockGenerator) -> Harness {
    harness_with(generator, MockRetriever::empty()).await
}

async fn harness_with(generator: MockGenerator, retriever: MockRetriever) -> Harness {
    let dir = TempDir::new().unwrap();
    let mut config = FrontdeskConfig::default();
    config.tickets.store_path = dir
        .path()
        .join("tickets.json")
        .to_string_lossy()
        .into_owned();

    let tickets = Arc::new(TicketStore::open(&config.tickets.store_path).await.unwrap());
    let session = SupportSession::new(
        &config,
        "user-1",
        Arc::new(generator),
        Arc::new(retriever),
        Arc::new(KeywordMemoryStore::new("user-1")),
        Arc::clone(&tickets),
    );
    Harness {
        session,
        tickets,
        _dir: dir,
    }
}

#[tokio::test]
async fn ordinary_question_goes_through_the_full_pipeline() {
    let mut h = harness_with(
        MockGenerator::with_responses(vec!["Refunds take 5 business days."]),
        MockRetriever::single("Refunds are processed within 5 business days.", "policy.pdf", 12),
    )
    .await;

    let outcome = h.session.handle_message("How long do refunds take?").await;
    assert_eq!(outcome.reply, "Refunds take 5 business days.");
    assert!(!outcome.escalated);
    assert!(outcome.ticket_id.is_none());
    assert_eq!(outcome.sources.len(), 1);
    assert_eq!(outcome.sources[0].source, "policy.pdf");

    // Both sides of the exchange are in short-term history.
    let history = h.session.memory().snapshot();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, Role::User);
    assert_eq!(history[1].role, Role::Assistant);
}

#[tokio::test]
async fn small_talk_skips_retrieval() {
    let mut h = harness_with(
        MockGenerator::with_responses(vec!["Hello! How can I help you today?"]),
        MockRetriever::failing(),
    )
    .await;

    // A failing retriever would force the fallback reply if it were consulted.
    let outcome = h.session.handle_message("hello").await;
    assert_eq!(outcome.reply, "Hello! How can I help you today?");
    assert!(outcome.sources.is_empty());
    assert!(!outcome.escalated);
}

#[tokio::test]
async fn punctuated_greeting_is_not_small_talk() {
    let mut h = harness_with(
        MockGenerator::with_responses(vec!["Hi there."]),
        MockRetriever::single("Greeting etiquette.", "handbook.pdf", 1),
    )
    .await;

    // Only exact lowercase matches bypass retrieval; trailing punctuation
    // makes it an ordinary message.
    let outcome = h.session.handle_message("hello!").await;
    assert_eq!(outcome.sources.len(), 1);
    assert!(!outcome.escalated);
}

#[tokio::test]
async fn repeated_refund_demands_escalate_high() {
    let mut h = harness(MockGenerator::with_responses(vec!["Let me check that."])).await;

    let first = h.session.handle_message("I want my refund now").await;
    assert!(!first.escalated);

    let second = h.session.handle_message("Give me my refund immediately").await;
    assert!(second.escalated);
    assert!(second.reply.contains("Reason: repeated complaint or refund demand"));
    assert!(second.reply.contains("Priority: HIGH"));

    let ticket_id = second.ticket_id.expect("escalation files a ticket");
    let ticket = h.tickets.get_ticket(&ticket_id).await.unwrap();
    assert_eq!(ticket.priority, Priority::High);
    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.user_id, "user-1");
    // Snapshot travels with the ticket and predates the handoff reply.
    assert!(!ticket.conversation.is_empty());
    assert!(ticket
        .conversation
        .iter()
        .all(|m| !m.content.contains("requires human assistance")));
}

#[tokio::test]
async fn first_occurrence_high_pattern_escalates_immediately() {
    let mut h = harness(MockGenerator::new()).await;

    let outcome = h
        .session
        .handle_message("I want a refund, this is terrible!")
        .await;
    assert!(outcome.escalated);
    assert!(outcome
        .reply
        .contains("complaint, demand, or sensitive issue detected"));
}

#[tokio::test]
async fn informational_refund_question_does_not_escalate() {
    let mut h = harness(MockGenerator::with_responses(vec![
        "Our refund policy allows returns within 30 days.",
    ]))
    .await;

    let outcome = h.session.handle_message("What is your refund policy?").await;
    assert!(!outcome.escalated);
    assert!(outcome.ticket_id.is_none());
}

#[tokio::test]
async fn pattern_escalation_priority_comes_from_the_reason() {
    let mut h = harness(MockGenerator::new()).await;

    let outcome = h
        .session
        .handle_message("I think my account was hacked")
        .await;
    assert!(outcome.escalated);
    let ticket_id = outcome.ticket_id.unwrap();
    let ticket = h.tickets.get_ticket(&ticket_id).await.unwrap();

    // Priority classifies the reason text, not the triggering message. The
    // generic pattern-rule reason names no sensitive keyword, so the ticket
    // takes the LOW default even though the message mentions hacking.
    assert_eq!(ticket.reason, "complaint, demand, or sensitive issue detected");
    assert_eq!(ticket.priority, priority_for_reason(&ticket.reason));
    assert_eq!(ticket.priority, Priority::Low);
}

#[tokio::test]
async fn failed_reply_streak_escalates_after_threshold() {
    let mut h = harness(MockGenerator::with_responses(vec![
        "i don't know",
        "i don't know",
        "i don't know",
    ]))
    .await;

    let first = h.session.handle_message("question one").await;
    assert!(!first.escalated);
    let second = h.session.handle_message("question two").await;
    assert!(!second.escalated);

    let third = h.session.handle_message("question three").await;
    assert!(third.escalated);
    assert!(third.reply.contains("Reason: multiple failed AI responses"));
    assert!(third.reply.contains("Priority: HIGH"));
}

#[tokio::test]
async fn good_reply_resets_the_failure_streak() {
    let mut h = harness(MockGenerator::with_responses(vec![
        "i don't know",
        "i don't know",
        "Here is a proper answer.",
        "i don't know",
    ]))
    .await;

    h.session.handle_message("one").await;
    h.session.handle_message("two").await;
    h.session.handle_message("three").await;

    // Streak was broken by the proper answer, so one more failure is not
    // enough to escalate.
    let fourth = h.session.handle_message("four").await;
    assert!(!fourth.escalated);
}

#[tokio::test]
async fn generator_failure_degrades_and_counts_toward_streak() {
    let mut h = harness(MockGenerator::failing()).await;

    let first = h.session.handle_message("why is my order late?").await;
    assert_eq!(first.reply, FALLBACK_REPLY);
    assert!(!first.escalated);

    h.session.handle_message("hello? anyone there?").await;
    let third = h.session.handle_message("still nothing?").await;
    assert!(third.escalated);
    assert!(third.reply.contains("multiple failed AI responses"));
}

#[tokio::test]
async fn takeover_freezes_the_conversation() {
    let mut h = harness(MockGenerator::new()).await;

    h.session.handle_message("I need a human agent").await;
    let outcome = h.session.handle_message("are you still there?").await;
    assert_eq!(outcome.reply, TAKEOVER_REPLY);
    assert!(outcome.escalated);
    assert!(outcome.ticket_id.is_none());

    // No new ticket per frozen turn.
    assert_eq!(h.tickets.list_tickets().await.len(), 1);
}

#[tokio::test]
async fn clear_releases_human_takeover() {
    let mut h = harness(MockGenerator::with_responses(vec!["Sure, happy to help."])).await;

    h.session.handle_message("I need a human agent").await;
    assert_eq!(
        h.session.handle_message("hello?").await.reply,
        TAKEOVER_REPLY
    );

    h.session.clear();
    assert!(h.session.memory().is_empty());

    let outcome = h.session.handle_message("what are your hours?").await;
    assert_eq!(outcome.reply, "Sure, happy to help.");
    assert!(!outcome.escalated);
}

#[tokio::test]
async fn name_statement_and_recall_round_trip() {
    let mut h = harness(MockGenerator::new()).await;

    let greeting = h.session.handle_message("My name is Rahim").await;
    assert_eq!(greeting.reply, "Nice to meet you, Rahim!");
    assert!(!greeting.escalated);

    let recall = h.session.handle_message("do you remember my name?").await;
    assert_eq!(recall.reply, "Your name is Rahim.");
}

#[tokio::test]
async fn name_query_without_introduction() {
    let mut h = harness(MockGenerator::new()).await;

    let outcome = h.session.handle_message("what is my name").await;
    assert_eq!(outcome.reply, "You haven't told me your name yet.");
}

#[tokio::test]
async fn name_statement_does_not_count_as_intent() {
    let mut h = harness(MockGenerator::new()).await;

    // A name introduction bypasses classification entirely, so it must not
    // contribute to escalation counters.
    h.session.handle_message("My name is Karim").await;
    assert!(h.session.memory().recent_intents().is_empty());
}

#[tokio::test]
async fn name_recall_survives_clear() {
    let mut h = harness(MockGenerator::new()).await;

    h.session.handle_message("My name is Ayesha").await;
    h.session.clear();

    let recall = h.session.handle_message("who am i").await;
    assert_eq!(recall.reply, "Your name is Ayesha.");
}

#[tokio::test]
async fn human_request_escalates_with_pattern_reason() {
    let mut h = harness(MockGenerator::new()).await;

    let outcome = h
        .session
        .handle_message("connect me to a human agent please")
        .await;
    assert!(outcome.escalated);
    let ticket_id = outcome.ticket_id.unwrap();
    let ticket = h.tickets.get_ticket(&ticket_id).await.unwrap();
    assert_eq!(ticket.reason, "complaint, demand, or sensitive issue detected");
}
