//! # contract: the filesystem seam used by the index walker
//!
//! The walker never touches `std::fs` directly. It asks an [`IndexFs`] for the
//! entries of a directory and whether each entry is a directory. [`LocalFs`] is the
//! real implementation; tests use the generated `MockIndexFs` to script listings and
//! failures that are awkward to produce on disk (permission errors, vanishing dirs).
//!
//! ## Mocking
//! The trait is annotated for `mockall`. The mock is exported when the
//! `test-export-mocks` feature is on (default) so integration tests can use it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use mockall::automock;
use tracing::trace;

/// What kind of filesystem object an entry resolves to.
///
/// Symlinks are followed: a link to a directory is a `Directory`,
/// a dangling link is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Other,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// File name of the entry (lossily converted to UTF-8).
    pub name: String,
    /// Full path: the listed directory joined with `name`.
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl IndexEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Read-only access to directory listings.
///
/// Implementations return entries in any order; the walker sorts them.
/// Any error is fatal for the scan and is reported with the listed path.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait IndexFs {
    /// List the entries of `path`.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<IndexEntry>>;
}

/// [`IndexFs`] backed by the host filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl IndexFs for LocalFs {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<IndexEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let entry_path = entry.path();
            let kind = match fs::metadata(&entry_path) {
                Ok(meta) if meta.is_dir() => EntryKind::Directory,
                _ => EntryKind::Other,
            };
            entries.push(IndexEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry_path,
                kind,
            });
        }
        trace!(path = %path.display(), entries = entries.len(), "Listed directory");
        Ok(entries)
    }
}
