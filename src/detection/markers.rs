//! Marker files that identify a project type
//!
//! The table is scanned in declaration order and the first type with any
//! marker present in the project root wins, even when markers for several
//! types coexist.

use super::types::ProjectType;
use crate::fs::FileSystem;
use std::path::Path;
use tracing::debug;

/// Ordered type table. Earlier entries take priority.
pub const TYPE_MARKERS: &[(ProjectType, &[&str])] = &[
    (ProjectType::Nodejs, &["package.json"]),
    (
        ProjectType::Python,
        &["requirements.txt", "setup.py", "pyproject.toml"],
    ),
    (ProjectType::Rust, &["Cargo.toml"]),
    (ProjectType::Go, &["go.mod"]),
    (ProjectType::Java, &["pom.xml", "build.gradle"]),
    (ProjectType::Php, &["composer.json"]),
    (ProjectType::Csharp, &["*.csproj", "*.sln"]),
];

/// A single marker: an exact root entry name or a `*.ext` suffix glob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPattern<'a> {
    Exact(&'a str),
    Suffix(&'a str),
}

impl<'a> MarkerPattern<'a> {
    pub fn parse(pattern: &'a str) -> Self {
        match pattern.strip_prefix('*') {
            Some(suffix) => MarkerPattern::Suffix(suffix),
            None => MarkerPattern::Exact(pattern),
        }
    }

    /// Exact names are probed directly; suffix globs are matched against
    /// the root listing.
    pub fn is_present(&self, fs: &dyn FileSystem, root: &Path, entries: &[String]) -> bool {
        match self {
            MarkerPattern::Exact(name) => fs.exists(&root.join(name)),
            MarkerPattern::Suffix(suffix) => entries
                .iter()
                .any(|entry| entry.len() > suffix.len() && entry.ends_with(suffix)),
        }
    }
}

/// Returns the first type in [`TYPE_MARKERS`] with a marker in `root`.
pub fn detect_project_type(fs: &dyn FileSystem, root: &Path, entries: &[String]) -> ProjectType {
    for (project_type, patterns) in TYPE_MARKERS {
        let matched = patterns
            .iter()
            .map(|p| MarkerPattern::parse(p))
            .find(|p| p.is_present(fs, root, entries));

        if let Some(marker) = matched {
            debug!(project_type = %project_type, ?marker, "Matched project marker");
            return *project_type;
        }
    }

    ProjectType::Unknown
}
