// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `frontdesk shell` command implementation.
//!
//! Launches an interactive support chat with colored prompt and readline
//! history. Creates a new session per invocation; `/clear` forgets the
//! conversation, `/quit` exits. The built-in tools are reachable directly
//! with `/tools`, `/calc`, and `/search`.

use std::sync::Arc;

use colored::Colorize;
use frontdesk_agent::{builtin_registry, SupportSession, ToolRegistry};
use frontdesk_config::FrontdeskConfig;
use frontdesk_core::error::FrontdeskError;
use frontdesk_core::traits::{Generator, KnowledgeRetriever};
use frontdesk_memory::KeywordMemoryStore;
use frontdesk_tickets::TicketStore;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;

use crate::stub::{NullRetriever, StubGenerator};

/// Runs the `frontdesk shell` interactive chat loop.
pub async fn run_shell(config: FrontdeskConfig, user_id: &str) -> Result<(), FrontdeskError> {
    let tickets = Arc::new(TicketStore::open(&config.tickets.store_path).await?);
    let generator: Arc<dyn Generator> = Arc::new(StubGenerator);
    let retriever: Arc<dyn KnowledgeRetriever> = Arc::new(NullRetriever);
    let tools = builtin_registry(
        Arc::clone(&tickets),
        Arc::clone(&retriever),
        Arc::clone(&generator),
    );

    let mut session = SupportSession::new(
        &config,
        user_id,
        generator,
        retriever,
        Arc::new(KeywordMemoryStore::new(user_id)),
        tickets,
    );
    info!(session = %session.session_id(), "shell session created");

    let mut rl = DefaultEditor::new()
        .map_err(|e| FrontdeskError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "frontdesk shell".bold().green());
    println!(
        "Type {} to forget the conversation, {} to exit, {} to list tools.\n",
        "/clear".yellow(),
        "/quit".yellow(),
        "/tools".yellow()
    );

    let prompt = format!("{}> ", config.agent.name.green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed == "/clear" {
                    session.clear();
                    println!("{}", "conversation cleared".dimmed());
                    continue;
                }
                if trimmed == "/tools" {
                    for (name, description) in tools.list() {
                        println!("  {} {}", name.cyan(), description.dimmed());
                    }
                    continue;
                }
                if let Some(expression) = trimmed.strip_prefix("/calc ") {
                    let input = serde_json::json!({ "expression": expression });
                    println!("{}", run_tool(&tools, "calculator", input).await);
                    continue;
                }
                if let Some(query) = trimmed.strip_prefix("/search ") {
                    let input = serde_json::json!({ "query": query });
                    println!("{}", run_tool(&tools, "kb_search", input).await);
                    continue;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let outcome = session.handle_message(trimmed).await;
                if outcome.escalated {
                    println!("{}", outcome.reply.yellow());
                } else {
                    println!("{}", outcome.reply);
                }
                for passage in &outcome.sources {
                    println!("{}", format!("  [source: {}]", passage.source).dimmed());
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Dispatches one tool invocation and flattens every failure into printable
/// text. The shell never aborts on a bad tool call.
async fn run_tool(tools: &ToolRegistry, name: &str, input: serde_json::Value) -> String {
    let Some(tool) = tools.get(name) else {
        return format!("no such tool: {name}");
    };
    match tool.invoke(input).await {
        Ok(output) => output.content,
        Err(error) => format!("tool failed: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn registry(dir: &tempfile::TempDir) -> ToolRegistry {
        let tickets = Arc::new(
            TicketStore::open(dir.path().join("tickets.json"))
                .await
                .unwrap(),
        );
        builtin_registry(tickets, Arc::new(NullRetriever), Arc::new(StubGenerator))
    }

    #[tokio::test]
    async fn calc_command_dispatches_through_the_registry() {
        let dir = tempfile::TempDir::new().unwrap();
        let tools = registry(&dir).await;

        let out = run_tool(&tools, "calculator", serde_json::json!({"expression": "6 * 7"})).await;
        assert_eq!(out, "Result: 42");
    }

    #[tokio::test]
    async fn unknown_tool_reports_instead_of_failing() {
        let dir = tempfile::TempDir::new().unwrap();
        let tools = registry(&dir).await;

        let out = run_tool(&tools, "teleport", serde_json::json!({})).await;
        assert_eq!(out, "no such tool: teleport");
    }

    #[tokio::test]
    async fn search_without_corpus_falls_back_to_generation() {
        let dir = tempfile::TempDir::new().unwrap();
        let tools = registry(&dir).await;

        // NullRetriever has no corpus, so kb_search routes the query to the
        // generator for a high-level answer.
        let out = run_tool(&tools, "kb_search", serde_json::json!({"query": "refunds"})).await;
        assert!(!out.is_empty());
        assert!(!out.contains("knowledge base:"));
    }
}
