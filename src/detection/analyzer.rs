use super::manifest::read_manifest;
use super::markers::detect_project_type;
use super::structure::StructureFlags;
use super::types::{ProjectInfo, ProjectType};
use crate::fs::{FileSystem, RealFileSystem};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const GIT_DIR: &str = ".git";

/// Inspects a project root and produces a [`ProjectInfo`] snapshot.
///
/// Every probe is best effort: read and listing errors are logged and
/// replaced with empty values, so `analyze` always returns.
pub struct ProjectAnalyzer<'a> {
    fs: &'a dyn FileSystem,
    root: PathBuf,
}

impl<'a> ProjectAnalyzer<'a> {
    pub fn new(fs: &'a dyn FileSystem, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    pub fn analyze(&self) -> ProjectInfo {
        info!(root = %self.root.display(), "Analyzing project structure");

        let files = self.list_root();
        let project_type = detect_project_type(self.fs, &self.root, &files);
        if project_type == ProjectType::Unknown {
            warn!("Could not detect project type");
        } else {
            debug!("Detected project type: {}", project_type);
        }

        let manifest = read_manifest(self.fs, &self.root, project_type);
        let flags = StructureFlags::scan(&files);
        let has_git = self.fs.exists(&self.root.join(GIT_DIR));

        debug!("Tests detected: {}", flags.has_tests);
        debug!("Docs detected: {}", flags.has_docs);
        debug!("License detected: {}", flags.has_license);

        ProjectInfo {
            project_type,
            dependencies: manifest.dependencies,
            dev_dependencies: manifest.dev_dependencies,
            scripts: manifest.scripts,
            files,
            has_git,
            has_tests: flags.has_tests,
            has_docs: flags.has_docs,
            has_license: flags.has_license,
            has_contributing: flags.has_contributing,
            has_changelog: flags.has_changelog,
            name: manifest.name,
            description: manifest.description,
            version: manifest.version,
            license: manifest.license,
            author: manifest.author,
            repository: manifest.repository,
        }
    }

    fn list_root(&self) -> Vec<String> {
        match self.fs.read_dir(&self.root) {
            Ok(names) => names,
            Err(e) => {
                debug!(error = %e, "Could not list project root");
                Vec::new()
            }
        }
    }
}

/// Analyzes `root` on the real file system.
pub fn analyze(root: &Path) -> ProjectInfo {
    let fs = RealFileSystem::new();
    ProjectAnalyzer::new(&fs, root).analyze()
}
