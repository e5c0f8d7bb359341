// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured prompt assembly for the generation capability.
//!
//! One fixed layout with four sections: known user info, conversation
//! history, knowledge context, and the question itself. What the model
//! does with it is out of scope; the sections are the contract.

use frontdesk_core::traits::Passage;

/// Assemble the full support prompt.
pub fn build_support_prompt(
    user_info: &str,
    history: &str,
    knowledge: &str,
    question: &str,
) -> String {
    format!(
        "You are a professional customer support AI.\n\
         \n\
         Known information about this user:\n{user_info}\n\
         \n\
         Conversation history:\n{history}\n\
         \n\
         Knowledge base info:\n{knowledge}\n\
         \n\
         User question:\n{question}\n\
         \n\
         Answer clearly and politely."
    )
}

/// Render long-term memory facts as a bulleted context block.
pub fn format_memory_context(facts: &[String]) -> String {
    facts
        .iter()
        .map(|f| format!("- {f}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render retrieved passages as a knowledge context block.
pub fn format_knowledge_context(passages: &[Passage]) -> String {
    passages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Prompt used by the knowledge-search tool when the corpus has no match:
/// ask the generator for a polite, high-level answer instead.
pub fn build_auto_summary_prompt(query: &str) -> String {
    format!(
        "You are a professional customer support assistant.\n\
         \n\
         The user asked:\n\"{query}\"\n\
         \n\
         The knowledge base does not contain a direct answer.\n\
         Provide a helpful, polite, high-level explanation based on typical\n\
         customer support documentation."
    )
}
