//! FileSystem trait definition

use crate::error::Result;

/// The operations tree walking needs from a backing store.
///
/// Paths are slash-separated strings (see [`crate::path`]). Implementations decide how relative
/// paths are anchored; callers should not mix paths from different stores.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &str) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &str) -> bool;

    /// Check if path is a regular file
    fn is_file(&self, path: &str) -> bool {
        self.exists(path) && !self.is_dir(path)
    }

    /// Create a single directory. Fails if the parent is missing or the path already exists.
    fn mkdir(&self, path: &str) -> Result<()>;

    /// Read the full contents of a file
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;

    /// Create or overwrite a file. Fails if the parent directory is missing.
    fn write_file(&self, path: &str, contents: &[u8]) -> Result<()>;

    /// Names of the immediate entries of a directory, in store order
    fn read_dir(&self, path: &str) -> Result<Vec<String>>;
}
