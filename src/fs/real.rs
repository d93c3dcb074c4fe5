use super::FileSystem;
use crate::error::{FsError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Backing store that forwards every call to the host filesystem.
#[derive(Debug, Clone, Copy)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn is_dir(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn is_file(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn mkdir(&self, path: &str) -> Result<()> {
        fs::create_dir(path).map_err(|e| FsError::from_io(path, e))
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        if self.is_dir(path) {
            return Err(FsError::IsADirectory(path.to_string()));
        }
        fs::read(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write_file(&self, path: &str, contents: &[u8]) -> Result<()> {
        if self.is_dir(path) {
            return Err(FsError::IsADirectory(path.to_string()));
        }
        fs::write(path, contents).map_err(|e| FsError::from_io(path, e))
    }

    fn read_dir(&self, path: &str) -> Result<Vec<String>> {
        if self.exists(path) && !self.is_dir(path) {
            return Err(FsError::NotADirectory(path.to_string()));
        }
        let entries = fs::read_dir(path).map_err(|e| FsError::from_io(path, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::from_io(path, e))?;
            let name = entry.file_name().into_string().map_err(|raw| FsError::Io {
                path: path.to_string(),
                source: io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("entry name is not valid UTF-8: {:?}", raw),
                ),
            })?;
            names.push(name);
        }

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        fs::create_dir(base.join("subdir")).unwrap();
        fs::File::create(base.join("test.txt"))
            .unwrap()
            .write_all(b"hello world")
            .unwrap();
        fs::File::create(base.join("subdir/nested.txt"))
            .unwrap()
            .write_all(b"nested content")
            .unwrap();

        dir
    }

    fn path_of(temp: &TempDir, rel: &str) -> String {
        temp.path().join(rel).to_str().unwrap().to_string()
    }

    #[test]
    fn test_exists() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.exists(&path_of(&temp, "test.txt")));
        assert!(fs.exists(&path_of(&temp, "subdir")));
        assert!(!fs.exists(&path_of(&temp, "nonexistent")));
    }

    #[test]
    fn test_is_dir_and_is_file() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.is_dir(&path_of(&temp, "subdir")));
        assert!(!fs.is_dir(&path_of(&temp, "test.txt")));
        assert!(fs.is_file(&path_of(&temp, "test.txt")));
        assert!(!fs.is_file(&path_of(&temp, "subdir")));
    }

    #[test]
    fn test_mkdir() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let dir = path_of(&temp, "fresh");
        fs.mkdir(&dir).unwrap();
        assert!(fs.is_dir(&dir));
    }

    #[test]
    fn test_mkdir_existing_fails() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let err = fs.mkdir(&path_of(&temp, "subdir")).unwrap_err();
        assert!(matches!(err, FsError::AlreadyExists(_)));
    }

    #[test]
    fn test_mkdir_missing_parent_fails() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let err = fs.mkdir(&path_of(&temp, "missing/child")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_file() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let content = fs.read_file(&path_of(&temp, "test.txt")).unwrap();
        assert_eq!(content, b"hello world");
    }

    #[test]
    fn test_read_file_missing() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let err = fs.read_file(&path_of(&temp, "nope.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_file_on_directory() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let err = fs.read_file(&path_of(&temp, "subdir")).unwrap_err();
        assert!(matches!(err, FsError::IsADirectory(_)));
    }

    #[test]
    fn test_write_file_overwrites() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let file = path_of(&temp, "test.txt");
        fs.write_file(&file, b"replaced").unwrap();
        assert_eq!(fs.read_file(&file).unwrap(), b"replaced");
    }

    #[test]
    fn test_write_file_missing_parent_fails() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let err = fs
            .write_file(&path_of(&temp, "missing/file.txt"), b"x")
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_dir() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let mut names = fs.read_dir(temp.path().to_str().unwrap()).unwrap();
        names.sort();

        assert_eq!(names, vec!["subdir".to_string(), "test.txt".to_string()]);
    }

    #[test]
    fn test_read_dir_on_file() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let err = fs.read_dir(&path_of(&temp, "test.txt")).unwrap_err();
        assert!(matches!(err, FsError::NotADirectory(_)));
    }
}
