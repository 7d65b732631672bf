use serde::{Deserialize, Serialize};
use std::fmt;

/// Project ecosystem inferred from marker files in the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Nodejs,
    Python,
    Rust,
    Go,
    Java,
    Php,
    Csharp,
    #[default]
    Unknown,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Nodejs => "nodejs",
            ProjectType::Python => "python",
            ProjectType::Rust => "rust",
            ProjectType::Go => "go",
            ProjectType::Java => "java",
            ProjectType::Php => "php",
            ProjectType::Csharp => "csharp",
            ProjectType::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != ProjectType::Unknown
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A package script, kept in manifest declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub name: String,
    pub command: String,
}

impl Script {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

/// Snapshot of everything the detector learned about the project root.
///
/// Built once by [`crate::detection::ProjectAnalyzer::analyze`] and only
/// read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub scripts: Vec<Script>,
    pub files: Vec<String>,
    pub has_git: bool,
    pub has_tests: bool,
    pub has_docs: bool,
    pub has_license: bool,
    pub has_contributing: bool,
    pub has_changelog: bool,
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub author: Option<String>,
    pub repository: Option<String>,
}

impl ProjectInfo {
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}
