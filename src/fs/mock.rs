use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone)]
struct MockEntry {
    content: Option<String>,
    kind: EntryKind,
}

/// In-memory file tree rooted at `/mock` (or a custom root).
///
/// Relative paths passed to the builder methods are resolved against the
/// root. Files added with [`MockFileSystem::add_unreadable_file`] exist but
/// fail on read, which is how tests simulate permission errors.
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let fs = Self {
            files: RwLock::new(HashMap::new()),
            root: root.clone(),
        };
        fs.add_dir(root);
        fs
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.insert(path.as_ref(), Some(content.to_string()), EntryKind::File);
    }

    pub fn add_unreadable_file(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), None, EntryKind::File);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), None, EntryKind::Directory);
    }

    /// Contents of a file previously added or written, if any.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = self.normalize_path(path.as_ref());
        self.read_files().get(&path).and_then(|e| e.content.clone())
    }

    fn insert(&self, path: &Path, content: Option<String>, kind: EntryKind) {
        let path = self.normalize_path(path);
        let mut files = self.write_files();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }

        files.insert(path, MockEntry { content, kind });
    }

    fn read_files(&self) -> RwLockReadGuard<'_, HashMap<PathBuf, MockEntry>> {
        self.files.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_files(&self) -> RwLockWriteGuard<'_, HashMap<PathBuf, MockEntry>> {
        self.files.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                kind: EntryKind::Directory,
            });
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.read_files().contains_key(&path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        let files = self.read_files();
        let entry = files
            .get(&path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?;

        if entry.kind != EntryKind::File {
            return Err(anyhow!("Not a file: {:?}", path));
        }

        entry
            .content
            .clone()
            .ok_or_else(|| anyhow!("Permission denied: {:?}", path))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<String>> {
        let path = self.normalize_path(path);
        let files = self.read_files();

        match files.get(&path) {
            Some(entry) if entry.kind == EntryKind::Directory => {}
            Some(_) => return Err(anyhow!("Not a directory: {:?}", path)),
            None => return Err(anyhow!("Directory not found: {:?}", path)),
        }

        let mut names: Vec<String> = files
            .keys()
            .filter(|file_path| file_path.parent() == Some(path.as_path()))
            .filter_map(|file_path| file_path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .collect();
        names.sort();

        Ok(names)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let path = self.normalize_path(path);
        let mut files = self.write_files();

        let parent_is_dir = path
            .parent()
            .and_then(|parent| files.get(parent))
            .map(|e| e.kind == EntryKind::Directory)
            .unwrap_or(false);
        if !parent_is_dir {
            return Err(anyhow!("Parent directory does not exist: {:?}", path));
        }
        if matches!(files.get(&path), Some(e) if e.kind == EntryKind::Directory) {
            return Err(anyhow!("Is a directory: {:?}", path));
        }

        files.insert(
            path,
            MockEntry {
                content: Some(contents.to_string()),
                kind: EntryKind::File,
            },
        );
        Ok(())
    }
}
