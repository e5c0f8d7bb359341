// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait and registry: the closed set of actions the support agent can
//! perform beyond plain generation.
//!
//! The registry is small and explicit rather than dynamically discovered:
//! exactly four built-in tools (calculator, ticket creation, escalation
//! summary, knowledge search), each looked up by name.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use frontdesk_core::error::FrontdeskError;
use frontdesk_core::traits::{Generator, KnowledgeRetriever};
use frontdesk_core::types::{Message, Priority};
use frontdesk_tickets::TicketStore;
use tracing::debug;

use crate::prompt;

/// Output from a tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// The content returned by the tool (text output, JSON, etc.).
    pub content: String,
    /// Whether the tool invocation resulted in an error.
    pub is_error: bool,
}

impl ToolOutput {
    fn ok(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }
}

/// Unified trait for all support tools.
///
/// Every tool provides a name, description, JSON Schema for its parameters,
/// and an async `invoke` method taking parsed JSON input.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool's unique name (used for registry lookup).
    fn name(&self) -> &str;

    /// Returns a human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Returns the JSON Schema describing the tool's input parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Invokes the tool with the given JSON input and returns the output.
    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, FrontdeskError>;
}

/// Registry of available tools, indexed by name.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registers a tool. The tool is indexed by its `name()`.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Returns (name, description) pairs for all registered tools, sorted
    /// by name.
    pub fn list(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .tools
            .values()
            .map(|t| (t.name(), t.description()))
            .collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }

    /// Returns the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the registry with all four built-in support tools.
pub fn builtin_registry(
    tickets: Arc<TicketStore>,
    retriever: Arc<dyn KnowledgeRetriever>,
    generator: Arc<dyn Generator>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(CalculatorTool));
    registry.register(Arc::new(TicketTool { tickets }));
    registry.register(Arc::new(EscalationSummaryTool));
    registry.register(Arc::new(KnowledgeSearchTool {
        retriever,
        generator,
    }));
    debug!(tools = registry.len(), "built-in tool registry assembled");
    registry
}

// --- Calculator ---

/// Basic arithmetic over `+ - * /`, evaluated strictly left to right
/// (no precedence). Good enough for "12.50 * 3"-style support questions;
/// anything unparsable reports a polite tool error.
pub struct CalculatorTool;

fn eval_expression(expression: &str) -> Option<f64> {
    let cleaned = expression.to_lowercase().replace("calculate", "");
    let mut tokens = cleaned.split_whitespace();

    let mut acc: f64 = tokens.next()?.parse().ok()?;
    loop {
        let Some(op) = tokens.next() else {
            return Some(acc);
        };
        let rhs: f64 = tokens.next()?.parse().ok()?;
        acc = match op {
            "+" => acc + rhs,
            "-" => acc - rhs,
            "*" | "x" => acc * rhs,
            "/" => {
                if rhs == 0.0 {
                    return None;
                }
                acc / rhs
            }
            _ => return None,
        };
    }
}

#[async_trait]
impl Tool for CalculatorTool {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Perform basic mathematical calculations"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "expression": {
                    "type": "string",
                    "description": "Whitespace-separated arithmetic, e.g. \"12.5 * 3\""
                }
            },
            "required": ["expression"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, FrontdeskError> {
        let expression = input["expression"].as_str().unwrap_or_default();
        match eval_expression(expression) {
            Some(result) => Ok(ToolOutput::ok(format!("Result: {result}"))),
            None => Ok(ToolOutput::error("Sorry, I could not calculate that.")),
        }
    }
}

// --- Ticket creation ---

/// Creates a support ticket for human agents.
pub struct TicketTool {
    tickets: Arc<TicketStore>,
}

#[async_trait]
impl Tool for TicketTool {
    fn name(&self) -> &str {
        "ticket"
    }

    fn description(&self) -> &str {
        "Create a support ticket for human agents"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "user_id": { "type": "string" },
                "reason": { "type": "string" },
                "priority": { "type": "string", "enum": ["LOW", "MEDIUM", "HIGH"] },
                "conversation": {
                    "type": "array",
                    "description": "Conversation snapshot attached to the ticket",
                    "items": { "type": "object" }
                }
            },
            "required": ["user_id", "reason", "priority"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, FrontdeskError> {
        let user_id = input["user_id"].as_str().unwrap_or("unknown");
        let reason = input["reason"].as_str().unwrap_or("unspecified");
        let Ok(priority) = input["priority"]
            .as_str()
            .unwrap_or_default()
            .parse::<Priority>()
        else {
            return Ok(ToolOutput::error("priority must be LOW, MEDIUM, or HIGH"));
        };
        let conversation: Vec<Message> = input
            .get("conversation")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();

        let ticket_id = self
            .tickets
            .create_ticket(user_id, reason, priority, conversation)
            .await?;
        Ok(ToolOutput::ok(ticket_id.to_string()))
    }
}

// --- Escalation summary ---

/// Prepares a handoff summary for the human agent taking over.
pub struct EscalationSummaryTool;

#[async_trait]
impl Tool for EscalationSummaryTool {
    fn name(&self) -> &str {
        "escalation_summary"
    }

    fn description(&self) -> &str {
        "Prepare an escalation summary for a human agent"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "user_message": { "type": "string" },
                "reason": { "type": "string" },
                "priority": { "type": "string" }
            },
            "required": ["user_message", "reason", "priority"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, FrontdeskError> {
        let user_message = input["user_message"].as_str().unwrap_or_default();
        let reason = input["reason"].as_str().unwrap_or_default();
        let priority = input["priority"].as_str().unwrap_or_default();
        Ok(ToolOutput::ok(format!(
            "Escalation Summary:\n\
             - Issue: {user_message}\n\
             - Reason: {reason}\n\
             - Priority: {priority}\n\
             This case requires human assistance."
        )))
    }
}

// --- Knowledge search ---

/// Searches the knowledge corpus and formats passages with source
/// attribution; falls back to a generator-written high-level answer when
/// the corpus has no match.
pub struct KnowledgeSearchTool {
    retriever: Arc<dyn KnowledgeRetriever>,
    generator: Arc<dyn Generator>,
}

#[async_trait]
impl Tool for KnowledgeSearchTool {
    fn name(&self) -> &str {
        "kb_search"
    }

    fn description(&self) -> &str {
        "Search and summarize the knowledge base"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": { "type": "string", "description": "What to look up" }
            },
            "required": ["query"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, FrontdeskError> {
        let query = input["query"].as_str().unwrap_or_default();
        let passages = self.retriever.search(query, 3).await?;

        if passages.is_empty() {
            let summary = self
                .generator
                .generate(&prompt::build_auto_summary_prompt(query))
                .await?;
            return Ok(ToolOutput::ok(summary));
        }

        let mut response = String::from("Here's what I found in the knowledge base:\n\n");
        for passage in &passages {
            let page = passage
                .page
                .map(|p| p.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            let mut text: String = passage.text.chars().take(300).collect();
            if text.len() < passage.text.len() {
                text.push_str("...");
            }
            response.push_str(&format!(
                "- {text}\n  (Source: {}, Page: {page})\n\n",
                passage.source
            ));
        }
        Ok(ToolOutput::ok(response.trim_end().to_string()))
    }
}
