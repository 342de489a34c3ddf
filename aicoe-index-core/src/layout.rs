//! Schema levels of an AICoE index tree.

use std::fmt;

/// Which schema rule applies to the children of a directory.
///
/// Derived from recursion depth only:
/// `root` lists platforms, a platform lists configurations, a configuration is
/// the simple-API root, `simple` lists packages, a package lists artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryLevel {
    Platform,
    Configuration,
    SimpleApiRoot,
    PackageListing,
    ArtifactListing,
}

impl DirectoryLevel {
    /// What each child at this level is expected to be, as shown to operators.
    pub fn child_noun(self) -> &'static str {
        match self {
            DirectoryLevel::Platform => "platform",
            DirectoryLevel::Configuration => "configuration",
            DirectoryLevel::SimpleApiRoot => "simple API directory",
            DirectoryLevel::PackageListing => "package name",
            DirectoryLevel::ArtifactListing => "wheel file",
        }
    }
}

impl fmt::Display for DirectoryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DirectoryLevel::Platform => "platform",
            DirectoryLevel::Configuration => "configuration",
            DirectoryLevel::SimpleApiRoot => "simple_api_root",
            DirectoryLevel::PackageListing => "package_listing",
            DirectoryLevel::ArtifactListing => "artifact_listing",
        };
        f.write_str(name)
    }
}
