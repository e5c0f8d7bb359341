// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generator capability trait for text generation backends.

use async_trait::async_trait;

use crate::error::FrontdeskError;
use crate::traits::capability::Capability;

/// Capability for producing a text reply from an assembled prompt.
///
/// Implementations may be slow and fallible; the turn controller catches
/// every error at this boundary and substitutes a fixed fallback reply, so
/// a generator failure never reaches the end user.
#[async_trait]
pub trait Generator: Capability {
    /// Generates a reply for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, FrontdeskError>;
}
