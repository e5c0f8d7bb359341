// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Durable escalation ticket storage for the Frontdesk orchestrator.
//!
//! One [`TicketStore`] is created per process and injected wherever tickets
//! are created or administered; it is never an ambient global.

pub mod store;

pub use store::TicketStore;
