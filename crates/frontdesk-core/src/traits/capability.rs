// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait that all external capability implementations must provide.

use async_trait::async_trait;

use crate::error::FrontdeskError;
use crate::types::{CapabilityType, HealthStatus};

/// The base trait for all Frontdesk external capabilities.
///
/// Every capability (generator, knowledge retriever, long-term memory) must
/// implement this trait, which provides identity and health check support.
#[async_trait]
pub trait Capability: Send + Sync + 'static {
    /// Returns the human-readable name of this capability instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this capability.
    fn version(&self) -> semver::Version;

    /// Returns the kind of capability (generator, knowledge, memory).
    fn capability_type(&self) -> CapabilityType;

    /// Performs a health check and returns the capability's current status.
    async fn health_check(&self) -> Result<HealthStatus, FrontdeskError>;
}
