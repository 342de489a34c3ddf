//! # walker: top-down validation of an AICoE index tree
//!
//! Expected layout:
//!
//! ```text
//! <root>/                      platforms (directories)
//!   <platform>/                build configurations (directories)
//!     <configuration>/         exactly one entry: `simple`
//!       simple/                package names (directories)
//!         <package>/           wheel files
//! ```
//!
//! Each level lists its directory through [`IndexFs`], records violations for entries
//! of the wrong shape, and descends into the rest. The scan is exhaustive: a bad entry
//! is reported and skipped while its siblings are still checked. The only subtree that
//! is not descended into after a problem is a configuration without `simple`.
//!
//! Entries are visited in sorted name order so repeated runs over an unchanged tree
//! produce identical reports.
//!
//! Listing failures are fatal and returned as [`IndexError`].

use std::path::Path;

use tracing::{debug, error, info};

use crate::contract::{IndexEntry, IndexFs, LocalFs};
use crate::error::IndexError;
use crate::layout::DirectoryLevel;
use crate::policy::PlatformPolicy;
use crate::report::{ValidationReport, ViolationKind};
use crate::wheel::{parse_wheel_name, WheelNameError};

/// Name of the PEP 503 simple repository directory.
pub const SIMPLE_DIR: &str = "simple";

/// Walks an index tree through an [`IndexFs`], applying a [`PlatformPolicy`] to every wheel.
pub struct IndexWalker<'a, F: IndexFs> {
    fs: &'a F,
    policy: &'a PlatformPolicy,
}

type LevelCheck<'a, F> = fn(&IndexWalker<'a, F>, &Path) -> Result<ValidationReport, IndexError>;

impl<'a, F: IndexFs> IndexWalker<'a, F> {
    pub fn new(fs: &'a F, policy: &'a PlatformPolicy) -> Self {
        Self { fs, policy }
    }

    /// Validate the whole tree rooted at `root`.
    pub fn check_index(&self, root: &Path) -> Result<ValidationReport, IndexError> {
        let allowed: Vec<&str> = self.policy.allowed_tags().collect();
        info!(root = %root.display(), allowed_platform_tags = ?allowed, "Starting index validation");

        let report = self.check_platform_dir(root)?;

        info!(
            root = %root.display(),
            platforms = report.scanned.platforms,
            configurations = report.scanned.configurations,
            packages = report.scanned.packages,
            artifacts = report.scanned.artifacts,
            violations = report.violations.len(),
            "Index validation finished"
        );
        Ok(report)
    }

    /// Every entry of `path` must be a platform directory.
    pub fn check_platform_dir(&self, path: &Path) -> Result<ValidationReport, IndexError> {
        self.check_directories(path, DirectoryLevel::Platform, Self::check_config_dir)
    }

    /// Every entry of a platform directory must be a build configuration directory.
    pub fn check_config_dir(&self, platform_path: &Path) -> Result<ValidationReport, IndexError> {
        self.check_directories(
            platform_path,
            DirectoryLevel::Configuration,
            Self::check_simple_api,
        )
    }

    /// A configuration directory must hold exactly one entry, the `simple` directory.
    ///
    /// A missing `simple` is reported once and nothing below is checked.
    pub fn check_simple_api(&self, config_path: &Path) -> Result<ValidationReport, IndexError> {
        let mut report = ValidationReport::new();
        let (simple, others): (Vec<IndexEntry>, Vec<IndexEntry>) = self
            .list(config_path)?
            .into_iter()
            .partition(|entry| entry.name == SIMPLE_DIR);

        let Some(simple) = simple.into_iter().next() else {
            report.record(
                config_path,
                ViolationKind::MissingSimple,
                format!(
                    "No directory called 'simple' found in {} (missing simple directory)",
                    config_path.display()
                ),
            );
            return Ok(report);
        };

        for other in &others {
            report.record(
                &other.path,
                ViolationKind::UnexpectedEntry,
                format!(
                    "Found {:?} in {}, only the simple directory is expected to be present",
                    other.name,
                    config_path.display()
                ),
            );
        }

        if !simple.is_dir() {
            report.record(
                &simple.path,
                ViolationKind::NotADirectory,
                format!(
                    "Path {} expects {} which is a directory (not a directory)",
                    simple.path.display(),
                    DirectoryLevel::SimpleApiRoot.child_noun()
                ),
            );
            return Ok(report);
        }

        report.merge(self.check_package_listing(&simple.path)?);
        Ok(report)
    }

    /// Every entry of `simple/` must be a package directory.
    pub fn check_package_listing(&self, simple_path: &Path) -> Result<ValidationReport, IndexError> {
        self.check_directories(
            simple_path,
            DirectoryLevel::PackageListing,
            Self::check_artifacts,
        )
    }

    /// Every entry of a package directory must be a correctly named wheel with an
    /// accepted platform tag.
    pub fn check_artifacts(&self, package_dir: &Path) -> Result<ValidationReport, IndexError> {
        let mut report = ValidationReport::new();

        for entry in self.list(package_dir)? {
            report.scanned.artifacts += 1;

            let artifact = match parse_wheel_name(&entry.name) {
                Ok(artifact) => artifact,
                Err(WheelNameError::NotAWheel) => {
                    report.record(
                        &entry.path,
                        ViolationKind::NotAWheel,
                        "Found artifact that is not a wheel file",
                    );
                    continue;
                }
                Err(WheelNameError::InvalidName) => {
                    report.record(
                        &entry.path,
                        ViolationKind::InvalidWheelName,
                        "Found wheel file that does not match wheel naming standard",
                    );
                    continue;
                }
            };
            debug!(path = %entry.path.display(), ?artifact, "Parsed wheel name");

            if let Err(violation) = self.policy.check(&artifact) {
                report.record(
                    &entry.path,
                    ViolationKind::DisallowedPlatformTag,
                    format!(
                        "Found platform tag {:?}, platform tag not in the allowed set {:?}",
                        violation.found, violation.allowed
                    ),
                );
            }
        }

        Ok(report)
    }

    /// Shared rule for levels whose children must all be directories.
    fn check_directories(
        &self,
        path: &Path,
        level: DirectoryLevel,
        descend: LevelCheck<'a, F>,
    ) -> Result<ValidationReport, IndexError> {
        let mut report = ValidationReport::new();

        for entry in self.list(path)? {
            if !entry.is_dir() {
                report.record(
                    &entry.path,
                    ViolationKind::NotADirectory,
                    format!(
                        "Path {} expects {} which is a directory (not a directory)",
                        entry.path.display(),
                        level.child_noun()
                    ),
                );
                continue;
            }

            match level {
                DirectoryLevel::Platform => report.scanned.platforms += 1,
                DirectoryLevel::Configuration => report.scanned.configurations += 1,
                DirectoryLevel::PackageListing => report.scanned.packages += 1,
                DirectoryLevel::SimpleApiRoot | DirectoryLevel::ArtifactListing => {}
            }
            debug!(path = %entry.path.display(), %level, "Descending");
            report.merge(descend(self, &entry.path)?);
        }

        Ok(report)
    }

    fn list(&self, path: &Path) -> Result<Vec<IndexEntry>, IndexError> {
        let mut entries = self.fs.list_dir(path).map_err(|source| {
            error!(path = %path.display(), error = %source, "Failed to list directory");
            IndexError::ReadDir {
                path: path.to_path_buf(),
                source,
            }
        })?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

/// Validate the tree at `root` on the local filesystem.
pub fn check_index(root: &Path, policy: &PlatformPolicy) -> Result<ValidationReport, IndexError> {
    IndexWalker::new(&LocalFs, policy).check_index(root)
}
