#![doc = "aicoe-index-core: validation logic for the AICoE Python package index layout."]

//! This crate holds everything needed to check an AICoE index tree:
//! the directory schema walk, wheel filename parsing and the platform tag policy.
//! The CLI crate only parses arguments, loads the policy file and renders the report.
//!
//! # Layout checked
//!
//! ```text
//! <root>/<platform>/<configuration>/simple/<package>/<artifact>.whl
//! ```
//!
//! # Usage
//! Build a [`walker::IndexWalker`] over a [`contract::IndexFs`] (usually [`contract::LocalFs`])
//! and a [`policy::PlatformPolicy`], then call [`walker::IndexWalker::check_index`].

pub mod contract;
pub mod error;
pub mod layout;
pub mod policy;
pub mod report;
pub mod walker;
pub mod wheel;

pub use contract::{EntryKind, IndexEntry, IndexFs, LocalFs};
pub use error::IndexError;
pub use layout::DirectoryLevel;
pub use policy::{PlatformPolicy, PolicyViolation, DEFAULT_PLATFORM_TAG};
pub use report::{ScanCounters, ValidationReport, Violation, ViolationClass, ViolationKind};
pub use walker::{check_index, IndexWalker};
pub use wheel::{parse_wheel_name, ArtifactName, WheelNameError};
