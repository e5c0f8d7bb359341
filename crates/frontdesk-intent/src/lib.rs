// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic intent classification for the Frontdesk orchestrator.
//!
//! Two pieces: the [`IntentClassifier`], a total function from message text
//! to a coarse [`IntentLabel`], and the [`NameExtractor`] identity fast-path
//! used by the turn controller before any other classification runs.

pub mod classifier;
pub mod identity;

pub use classifier::{IntentClassifier, IntentLabel};
pub use identity::NameExtractor;
