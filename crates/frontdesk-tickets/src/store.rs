// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Durable ticket store shared across sessions and admins.
//!
//! All read-modify-write sequences are serialized behind one async lock,
//! since concurrent admin edits and new escalations can interleave. Every
//! mutation atomically rewrites the full record set (temp file + rename),
//! accepting the O(n) cost: a crash between two writes never corrupts
//! previously committed records.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use frontdesk_core::error::FrontdeskError;
use frontdesk_core::types::{Message, Priority, Role, Ticket, TicketId, TicketStatus};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// JSON-file backed store for escalation records.
pub struct TicketStore {
    path: PathBuf,
    tickets: Mutex<Vec<Ticket>>,
}

impl TicketStore {
    /// Opens the store at `path`, loading any existing record set.
    ///
    /// A missing file starts an empty store. A malformed file is treated
    /// as empty rather than crashing, favoring availability over the rare
    /// loss of historical tickets; the condition is logged as a warning.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, FrontdeskError> {
        let path = path.as_ref().to_path_buf();

        let tickets = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<Ticket>>(&bytes) {
                Ok(tickets) => {
                    debug!(path = %path.display(), count = tickets.len(), "loaded ticket store");
                    tickets
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "ticket store is malformed, starting with an empty record set"
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(FrontdeskError::storage(e)),
        };

        Ok(Self {
            path,
            tickets: Mutex::new(tickets),
        })
    }

    /// Creates a new OPEN ticket with a snapshot of the conversation and
    /// persists the record set. Returns the new ticket's id.
    pub async fn create_ticket(
        &self,
        user_id: &str,
        reason: &str,
        priority: Priority,
        conversation: Vec<Message>,
    ) -> Result<TicketId, FrontdeskError> {
        let now = chrono::Utc::now().to_rfc3339();
        let ticket_id = TicketId(generate_ticket_id());
        let ticket = Ticket {
            ticket_id: ticket_id.clone(),
            user_id: user_id.to_string(),
            reason: reason.to_string(),
            priority,
            status: TicketStatus::Open,
            conversation,
            created_at: now.clone(),
            updated_at: now,
        };

        let mut tickets = self.tickets.lock().await;
        tickets.push(ticket);
        self.persist(&tickets).await?;

        info!(
            ticket_id = %ticket_id,
            user_id,
            reason,
            priority = %priority,
            "escalation ticket created"
        );
        Ok(ticket_id)
    }

    /// All tickets, newest first.
    pub async fn list_tickets(&self) -> Vec<Ticket> {
        let tickets = self.tickets.lock().await;
        let mut out: Vec<Ticket> = tickets.clone();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }

    /// Fetch a single ticket by id.
    pub async fn get_ticket(&self, ticket_id: &TicketId) -> Option<Ticket> {
        let tickets = self.tickets.lock().await;
        tickets.iter().find(|t| &t.ticket_id == ticket_id).cloned()
    }

    /// Updates a ticket's status and bumps `updated_at`.
    ///
    /// Returns `Ok(false)` for an unknown ticket, leaving every record
    /// unchanged. Invalid status strings are rejected before this point by
    /// the enum type.
    pub async fn update_status(
        &self,
        ticket_id: &TicketId,
        status: TicketStatus,
    ) -> Result<bool, FrontdeskError> {
        let mut tickets = self.tickets.lock().await;
        let Some(ticket) = tickets.iter_mut().find(|t| &t.ticket_id == ticket_id) else {
            return Ok(false);
        };

        ticket.status = status;
        ticket.updated_at = chrono::Utc::now().to_rfc3339();
        self.persist(&tickets).await?;

        info!(ticket_id = %ticket_id, status = %status, "ticket status updated");
        Ok(true)
    }

    /// Appends an admin reply to the ticket's conversation snapshot and
    /// bumps `updated_at`. Returns `Ok(false)` for an unknown ticket.
    pub async fn append_admin_reply(
        &self,
        ticket_id: &TicketId,
        text: &str,
    ) -> Result<bool, FrontdeskError> {
        let mut tickets = self.tickets.lock().await;
        let Some(ticket) = tickets.iter_mut().find(|t| &t.ticket_id == ticket_id) else {
            return Ok(false);
        };

        ticket.conversation.push(Message::now(Role::Admin, text));
        ticket.updated_at = chrono::Utc::now().to_rfc3339();
        self.persist(&tickets).await?;

        debug!(ticket_id = %ticket_id, "admin reply appended");
        Ok(true)
    }

    /// Ticket counts per status. Always returns all three statuses,
    /// zero-initialized.
    pub async fn count_by_status(&self) -> BTreeMap<TicketStatus, usize> {
        let tickets = self.tickets.lock().await;
        let mut counts: BTreeMap<TicketStatus, usize> =
            TicketStatus::ALL.into_iter().map(|s| (s, 0)).collect();
        for ticket in tickets.iter() {
            *counts.entry(ticket.status).or_insert(0) += 1;
        }
        counts
    }

    /// Ticket counts per priority. Only priorities actually present appear.
    pub async fn count_by_priority(&self) -> BTreeMap<Priority, usize> {
        let tickets = self.tickets.lock().await;
        let mut counts = BTreeMap::new();
        for ticket in tickets.iter() {
            *counts.entry(ticket.priority).or_insert(0) += 1;
        }
        counts
    }

    /// Atomically rewrites the full record set: write to a temp file in the
    /// same directory, then rename over the target.
    async fn persist(&self, tickets: &[Ticket]) -> Result<(), FrontdeskError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(FrontdeskError::storage)?;
            }
        }

        let json = serde_json::to_vec_pretty(tickets).map_err(FrontdeskError::storage)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(FrontdeskError::storage)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(FrontdeskError::storage)?;
        Ok(())
    }
}

/// Ticket ids embed the creation time in millis so lexical comparison of
/// same-epoch ids roughly follows creation order; a random suffix keeps
/// them unique under concurrent creation.
fn generate_ticket_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("TICKET-{millis}-{}", &suffix[..6])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("tickets.json")
    }

    fn snapshot() -> Vec<Message> {
        vec![
            Message::now(Role::User, "I want a refund now"),
            Message::now(Role::Assistant, "let me check that"),
        ]
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = TicketStore::open(store_path(&dir)).await.unwrap();

        let conversation = snapshot();
        let id = store
            .create_ticket("u1", "repeated complaint or refund demand", Priority::High, conversation.clone())
            .await
            .unwrap();

        let ticket = store.get_ticket(&id).await.expect("ticket should exist");
        assert_eq!(ticket.reason, "repeated complaint or refund demand");
        assert_eq!(ticket.priority, Priority::High);
        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.conversation, conversation);
    }

    #[tokio::test]
    async fn list_is_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = TicketStore::open(store_path(&dir)).await.unwrap();

        let first = store
            .create_ticket("u1", "first", Priority::Low, Vec::new())
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = store
            .create_ticket("u1", "second", Priority::Low, Vec::new())
            .await
            .unwrap();

        let listed = store.list_tickets().await;
        assert_eq!(listed[0].ticket_id, second);
        assert_eq!(listed[1].ticket_id, first);
    }

    #[tokio::test]
    async fn update_status_unknown_ticket_returns_false() {
        let dir = tempfile::tempdir().unwrap();
        let store = TicketStore::open(store_path(&dir)).await.unwrap();
        let id = store
            .create_ticket("u1", "reason", Priority::Low, Vec::new())
            .await
            .unwrap();

        let unknown = TicketId("TICKET-0-ffffff".into());
        let updated = store
            .update_status(&unknown, TicketStatus::Resolved)
            .await
            .unwrap();
        assert!(!updated);

        // The known record is untouched.
        assert_eq!(store.get_ticket(&id).await.unwrap().status, TicketStatus::Open);
    }

    #[tokio::test]
    async fn update_status_bumps_updated_at() {
        let dir = tempfile::tempdir().unwrap();
        let store = TicketStore::open(store_path(&dir)).await.unwrap();
        let id = store
            .create_ticket("u1", "reason", Priority::Low, Vec::new())
            .await
            .unwrap();

        let before = store.get_ticket(&id).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        assert!(store.update_status(&id, TicketStatus::InProgress).await.unwrap());

        let after = store.get_ticket(&id).await.unwrap();
        assert_eq!(after.status, TicketStatus::InProgress);
        assert!(after.updated_at > before.updated_at);
    }

    #[tokio::test]
    async fn invalid_status_string_is_unrepresentable() {
        // The storage layer accepts any of the three statuses directly; a
        // fourth value is rejected at parse time, before any record changes.
        assert!(TicketStatus::from_str("RESOLVED").is_ok());
        assert!(TicketStatus::from_str("ESCALATED").is_err());
    }

    #[tokio::test]
    async fn append_admin_reply_extends_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = TicketStore::open(store_path(&dir)).await.unwrap();
        let id = store
            .create_ticket("u1", "reason", Priority::Medium, snapshot())
            .await
            .unwrap();

        assert!(store.append_admin_reply(&id, "we are on it").await.unwrap());
        let ticket = store.get_ticket(&id).await.unwrap();
        let last = ticket.conversation.last().unwrap();
        assert_eq!(last.role, Role::Admin);
        assert_eq!(last.content, "we are on it");

        let unknown = TicketId("TICKET-0-ffffff".into());
        assert!(!store.append_admin_reply(&unknown, "hello?").await.unwrap());
    }

    #[tokio::test]
    async fn store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let id = {
            let store = TicketStore::open(&path).await.unwrap();
            store
                .create_ticket("u1", "reason", Priority::High, snapshot())
                .await
                .unwrap()
        };

        let reopened = TicketStore::open(&path).await.unwrap();
        let ticket = reopened.get_ticket(&id).await.expect("persisted ticket");
        assert_eq!(ticket.priority, Priority::High);
        assert_eq!(ticket.conversation.len(), 2);
    }

    #[tokio::test]
    async fn malformed_file_loads_as_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        tokio::fs::write(&path, b"{ not json ]").await.unwrap();

        let store = TicketStore::open(&path).await.unwrap();
        assert!(store.list_tickets().await.is_empty());

        // Still usable for new tickets.
        let id = store
            .create_ticket("u1", "reason", Priority::Low, Vec::new())
            .await
            .unwrap();
        assert!(store.get_ticket(&id).await.is_some());
    }

    #[tokio::test]
    async fn count_by_status_is_zero_initialized() {
        let dir = tempfile::tempdir().unwrap();
        let store = TicketStore::open(store_path(&dir)).await.unwrap();

        let counts = store.count_by_status().await;
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&TicketStatus::Open], 0);
        assert_eq!(counts[&TicketStatus::InProgress], 0);
        assert_eq!(counts[&TicketStatus::Resolved], 0);

        let id = store
            .create_ticket("u1", "reason", Priority::Low, Vec::new())
            .await
            .unwrap();
        store.update_status(&id, TicketStatus::Resolved).await.unwrap();
        store
            .create_ticket("u2", "reason", Priority::High, Vec::new())
            .await
            .unwrap();

        let counts = store.count_by_status().await;
        assert_eq!(counts[&TicketStatus::Open], 1);
        assert_eq!(counts[&TicketStatus::Resolved], 1);
    }

    #[tokio::test]
    async fn count_by_priority_has_dynamic_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = TicketStore::open(store_path(&dir)).await.unwrap();

        assert!(store.count_by_priority().await.is_empty());

        store
            .create_ticket("u1", "a", Priority::High, Vec::new())
            .await
            .unwrap();
        store
            .create_ticket("u2", "b", Priority::High, Vec::new())
            .await
            .unwrap();

        let counts = store.count_by_priority().await;
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&Priority::High], 2);
    }

    #[test]
    fn ticket_ids_are_unique_and_prefixed() {
        let a = generate_ticket_id();
        let b = generate_ticket_id();
        assert!(a.starts_with("TICKET-"));
        assert_ne!(a, b);
    }
}
