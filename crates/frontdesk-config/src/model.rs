// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Frontdesk orchestrator.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Frontdesk configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FrontdeskConfig {
    /// Agent identity and behavior settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Conversation memory settings.
    #[serde(default)]
    pub memory: MemoryConfig,

    /// Escalation thresholds.
    #[serde(default)]
    pub escalation: EscalationConfig,

    /// Knowledge and long-term memory retrieval settings.
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Ticket store settings.
    #[serde(default)]
    pub tickets: TicketsConfig,
}

/// Agent identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Exact-match greetings that bypass retrieval and go straight to the
    /// generator.
    #[serde(default = "default_small_talk")]
    pub small_talk: Vec<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            small_talk: default_small_talk(),
        }
    }
}

fn default_agent_name() -> String {
    "frontdesk".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_small_talk() -> Vec<String> {
    ["hi", "hello", "hey", "how are you"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Conversation memory configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Maximum messages retained in the short-term history window.
    /// Oldest messages are evicted first.
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Size of the recent-intent ring buffer (diagnostic only).
    #[serde(default = "default_recent_intents")]
    pub recent_intents: usize,

    /// SLA time budget in seconds. Breach is advisory, never destructive.
    #[serde(default = "default_sla_seconds")]
    pub sla_seconds: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_history: default_max_history(),
            recent_intents: default_recent_intents(),
            sla_seconds: default_sla_seconds(),
        }
    }
}

fn default_max_history() -> usize {
    20
}

fn default_recent_intents() -> usize {
    10
}

fn default_sla_seconds() -> u64 {
    1800
}

/// Escalation threshold configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EscalationConfig {
    /// Number of REFUND_DEMAND or COMPLAINT intents that triggers the
    /// repeated-intent escalation rule.
    #[serde(default = "default_repeat_threshold")]
    pub repeat_threshold: u32,

    /// Number of consecutive failed generated replies that triggers
    /// escalation.
    #[serde(default = "default_failed_reply_threshold")]
    pub failed_reply_threshold: u32,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            repeat_threshold: default_repeat_threshold(),
            failed_reply_threshold: default_failed_reply_threshold(),
        }
    }
}

fn default_repeat_threshold() -> u32 {
    2
}

fn default_failed_reply_threshold() -> u32 {
    3
}

/// Retrieval fan-out configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RetrievalConfig {
    /// Passages fetched from the knowledge corpus per turn.
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Facts fetched from long-term memory per turn.
    #[serde(default = "default_memory_top_k")]
    pub memory_top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            memory_top_k: default_memory_top_k(),
        }
    }
}

fn default_top_k() -> usize {
    3
}

fn default_memory_top_k() -> usize {
    3
}

/// Ticket store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TicketsConfig {
    /// Path to the JSON file holding the escalation record set.
    #[serde(default = "default_store_path")]
    pub store_path: String,
}

impl Default for TicketsConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("frontdesk").join("tickets.json"))
        .unwrap_or_else(|| std::path::PathBuf::from("frontdesk_tickets.json"))
        .to_string_lossy()
        .into_owned()
}
