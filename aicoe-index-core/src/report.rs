//! # report: accumulated validation results
//!
//! Every layout problem found during a scan becomes a [`Violation`]. Reports are built
//! bottom-up: each walker level returns its own [`ValidationReport`] and the caller
//! [`merge`](ValidationReport::merge)s it into its own. Nothing here aborts a scan.
//!
//! Recording a violation also emits one `tracing` error event carrying the offending
//! path and the violation kind, so operators see problems as they are found.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::error;

/// What went wrong with a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    NotADirectory,
    NotAWheel,
    InvalidWheelName,
    UnexpectedEntry,
    MissingSimple,
    DisallowedPlatformTag,
}

/// Coarse classification of violation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationClass {
    /// Wrong entry kind at a schema level.
    Structural,
    /// Artifact is not a wheel or its name does not parse.
    Naming,
    /// Artifact parses but its platform tag is not accepted.
    Policy,
    /// `simple` directory missing or accompanied by other entries.
    Schema,
}

impl ViolationKind {
    pub fn class(self) -> ViolationClass {
        match self {
            ViolationKind::NotADirectory => ViolationClass::Structural,
            ViolationKind::NotAWheel | ViolationKind::InvalidWheelName => ViolationClass::Naming,
            ViolationKind::DisallowedPlatformTag => ViolationClass::Policy,
            ViolationKind::UnexpectedEntry | ViolationKind::MissingSimple => {
                ViolationClass::Schema
            }
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ViolationKind::NotADirectory => "not a directory",
            ViolationKind::NotAWheel => "not a wheel file",
            ViolationKind::InvalidWheelName => "does not match wheel naming standard",
            ViolationKind::UnexpectedEntry => "unexpected non-simple entry present",
            ViolationKind::MissingSimple => "missing simple directory",
            ViolationKind::DisallowedPlatformTag => "platform tag not in the allowed set",
        };
        f.write_str(text)
    }
}

/// One recorded layout problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: PathBuf,
    pub kind: ViolationKind,
    pub message: String,
}

/// Number of entries of each level that were visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanCounters {
    pub platforms: usize,
    pub configurations: usize,
    pub packages: usize,
    pub artifacts: usize,
}

impl ScanCounters {
    fn add(&mut self, other: ScanCounters) {
        self.platforms += other.platforms;
        self.configurations += other.configurations;
        self.packages += other.packages;
        self.artifacts += other.artifacts;
    }
}

/// Result of validating a subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub scanned: ScanCounters,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if anything was recorded in this subtree or below.
    pub fn has_errors(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Record a violation and log it.
    pub fn record(&mut self, path: &Path, kind: ViolationKind, message: impl Into<String>) {
        let message = message.into();
        error!(
            path = %path.display(),
            kind = %kind,
            class = ?kind.class(),
            "{message}"
        );
        self.violations.push(Violation {
            path: path.to_path_buf(),
            kind,
            message,
        });
    }

    /// Append a child report: violations are concatenated, counters summed.
    pub fn merge(&mut self, child: ValidationReport) {
        self.violations.extend(child.violations);
        self.scanned.add(child.scanned);
    }

    pub fn count_of(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }

    pub fn count_of_class(&self, class: ViolationClass) -> usize {
        self.violations
            .iter()
            .filter(|v| v.kind.class() == class)
            .count()
    }
}
