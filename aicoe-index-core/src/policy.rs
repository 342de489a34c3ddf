//! Platform tag policy applied to parsed wheel names.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::wheel::ArtifactName;

/// Tag accepted when no policy is configured (PEP 513).
pub const DEFAULT_PLATFORM_TAG: &str = "manylinux1_x86_64";

/// Set of platform tags an artifact may declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformPolicy {
    allowed_platform_tags: BTreeSet<String>,
}

/// The artifact parsed fine but its platform tag is not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("found platform tag {found:?}, not in the allowed set {allowed:?}")]
pub struct PolicyViolation {
    pub found: String,
    pub allowed: Vec<String>,
}

impl PlatformPolicy {
    /// Policy accepting exactly `tags`. An empty set accepts nothing.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_platform_tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Add `tag` to the accepted set.
    pub fn allow(&mut self, tag: impl Into<String>) {
        self.allowed_platform_tags.insert(tag.into());
    }

    pub fn allowed_tags(&self) -> impl Iterator<Item = &str> {
        self.allowed_platform_tags.iter().map(String::as_str)
    }

    pub fn is_allowed(&self, platform_tag: &str) -> bool {
        self.allowed_platform_tags.contains(platform_tag)
    }

    pub fn check(&self, artifact: &ArtifactName) -> Result<(), PolicyViolation> {
        if self.is_allowed(&artifact.platform_tag) {
            return Ok(());
        }
        Err(PolicyViolation {
            found: artifact.platform_tag.clone(),
            allowed: self.allowed_tags().map(str::to_string).collect(),
        })
    }
}

impl Default for PlatformPolicy {
    fn default() -> Self {
        Self::new([DEFAULT_PLATFORM_TAG])
    }
}
