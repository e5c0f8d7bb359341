// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common domain types shared across the Frontdesk workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a conversation session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an escalation ticket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(pub String);

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a conversation message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    Admin,
}

/// A single conversation message. Immutable once appended to a history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// ISO 8601 UTC timestamp.
    pub timestamp: String,
}

impl Message {
    /// Creates a message stamped with the current UTC time.
    pub fn now(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Ticket priority assigned at escalation time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Lifecycle status of an escalation ticket.
///
/// The store accepts any of the three values as a direct update; forward-only
/// ordering discipline, if desired, belongs to the caller.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

impl TicketStatus {
    /// All status values, in lifecycle order. Used for zero-initialized analytics.
    pub const ALL: [TicketStatus; 3] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
    ];
}

/// The durable escalation record created when a conversation is handed to a human.
///
/// The `conversation` field is a snapshot copied at creation time, not a live
/// reference; appended admin replies are the only post-creation mutation to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub user_id: String,
    pub reason: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub conversation: Vec<Message>,
    /// ISO 8601 UTC timestamp.
    pub created_at: String,
    /// ISO 8601 UTC timestamp.
    pub updated_at: String,
}

/// Health status reported by capability health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Capability is fully operational.
    Healthy,
    /// Capability is operational but experiencing issues.
    Degraded(String),
    /// Capability is not operational.
    Unhealthy(String),
}

/// Identifies the kind of external capability behind a trait object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum CapabilityType {
    Generator,
    Knowledge,
    Memory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn priority_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"HIGH\"");
        let parsed: Priority = serde_json::from_str("\"MEDIUM\"").unwrap();
        assert_eq!(parsed, Priority::Medium);
    }

    #[test]
    fn priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }

    #[test]
    fn status_screaming_snake_round_trip() {
        for status in TicketStatus::ALL {
            let s = status.to_string();
            let parsed = TicketStatus::from_str(&s).expect("should parse back");
            assert_eq!(status, parsed);
        }
        assert_eq!(TicketStatus::InProgress.to_string(), "IN_PROGRESS");
    }

    #[test]
    fn status_rejects_unknown_value() {
        assert!(TicketStatus::from_str("CLOSED").is_err());
        assert!(serde_json::from_str::<TicketStatus>("\"CLOSED\"").is_err());
    }

    #[test]
    fn message_now_has_rfc3339_timestamp() {
        let msg = Message::now(Role::User, "hello");
        assert_eq!(msg.role, Role::User);
        assert!(chrono::DateTime::parse_from_rfc3339(&msg.timestamp).is_ok());
    }

    #[test]
    fn ticket_persisted_layout() {
        let ticket = Ticket {
            ticket_id: TicketId("TICKET-1".into()),
            user_id: "u1".into(),
            reason: "general query".into(),
            priority: Priority::Low,
            status: TicketStatus::Open,
            conversation: vec![Message::now(Role::User, "hi")],
            created_at: "2026-03-01T00:00:00+00:00".into(),
            updated_at: "2026-03-01T00:00:00+00:00".into(),
        };
        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["ticket_id"], "TICKET-1");
        assert_eq!(json["status"], "OPEN");
        assert_eq!(json["priority"], "LOW");
        assert_eq!(json["conversation"][0]["role"], "user");
    }
}
