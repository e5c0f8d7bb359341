// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity fast-path: name extraction and name-recall detection.
//!
//! Name assertions are matched against an ordered list of phrase patterns
//! (English plus two Bangla equivalents); the first capturing match wins.
//! A small stoplist rejects non-name captures so casual phrases like
//! "I am fine" never register as identity assertions.

use regex::Regex;

/// Common non-name words that the capture patterns would otherwise accept.
const NAME_STOPLIST: &[&str] = &[
    "fine", "okay", "angry", "sad", "happy", "ready", "tired", "having", "trouble", "problem",
    "not", "bad", "terrible", "sorry", "sure", "still", "just", "really",
];

/// Phrases that indicate the user is asking for their stored name.
const NAME_QUERY_PHRASES: &[&str] = &[
    "what is my name",
    "do you remember my name",
    "remember my name",
    "who am i",
    "amar naam",
    "amar nam ki",
];

/// Ordered name-assertion patterns with false-positive protection.
pub struct NameExtractor {
    patterns: Vec<Regex>,
}

impl NameExtractor {
    /// Compile the assertion patterns. Pattern order is significant:
    /// more specific phrasings come first.
    pub fn new() -> Self {
        let sources = [
            // English
            r"(?i)\bmy name is\s+([a-zA-Z]{2,}(?:\s[a-zA-Z]{2,})?)",
            r"(?i)\bi am\s+([a-zA-Z]{2,})",
            r"(?i)\bi'm\s+([a-zA-Z]{2,})",
            r"(?i)\bcall me\s+([a-zA-Z]{2,})",
            r"(?i)\bthis is\s+([a-zA-Z]{2,})",
            // Bangla
            r"আমার নাম\s+([\p{Bengali}A-Za-z]+)",
            r"আমি\s+([\p{Bengali}A-Za-z]+)",
        ];

        let patterns = sources
            .iter()
            .map(|s| Regex::new(s).expect("name patterns are compile-time constants"))
            .collect();

        Self { patterns }
    }

    /// Extract an asserted name from a message, or `None`.
    ///
    /// The first pattern with a capture wins; stoplisted captures are
    /// rejected entirely rather than falling through to later patterns,
    /// matching the fixed evaluation order.
    pub fn extract(&self, message: &str) -> Option<String> {
        let msg = message.trim();

        for pattern in &self.patterns {
            if let Some(caps) = pattern.captures(msg) {
                let raw = caps.get(1)?.as_str().trim();
                if NAME_STOPLIST.contains(&raw.to_lowercase().as_str()) {
                    return None;
                }
                return Some(title_case(raw));
            }
        }

        None
    }

    /// Detect questions asking about the user's stored name.
    pub fn is_name_query(&self, message: &str) -> bool {
        let lower = message.to_lowercase();
        NAME_QUERY_PHRASES.iter().any(|q| lower.contains(q))
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Uppercase the first letter of each whitespace-separated word,
/// lowercasing the rest.
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
