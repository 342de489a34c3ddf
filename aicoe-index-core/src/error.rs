use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures that abort a scan.
///
/// Layout problems are never errors; they are recorded in the
/// [`ValidationReport`](crate::report::ValidationReport).
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to list directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    /// Path whose listing failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            IndexError::ReadDir { path, .. } => path,
        }
    }
}
