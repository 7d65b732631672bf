//! FileSystem trait definition

use anyhow::Result;
use std::path::Path;

/// Abstraction over the handful of file operations the detector and the
/// README writer need, so both can run against an in-memory tree in tests.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Names of the entries directly inside `path` (no recursion)
    fn read_dir(&self, path: &Path) -> Result<Vec<String>>;

    /// Create or truncate `path` and write `contents` to it
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}
