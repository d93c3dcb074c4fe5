//! Error taxonomy shared by every backing store and tree operation

use crate::config::ConfigError;
use std::io;
use thiserror::Error;

// Raw errno values without a stable `io::ErrorKind` on older toolchains.
#[cfg(unix)]
const ENOTDIR: i32 = 20;
#[cfg(unix)]
const EISDIR: i32 = 21;

pub type Result<T> = std::result::Result<T, FsError>;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("No such file or directory: {0}")]
    NotFound(String),

    #[error("Path already exists: {0}")]
    AlreadyExists(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Is a directory: {0}")]
    IsADirectory(String),

    #[error("I/O failure at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid module name: {0:?}")]
    InvalidModuleName(String),

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FsError {
    /// Maps an OS error onto the taxonomy, keeping the path that failed.
    pub fn from_io(path: impl Into<String>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path),
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path),
            _ => match source.raw_os_error() {
                #[cfg(unix)]
                Some(ENOTDIR) => FsError::NotADirectory(path),
                #[cfg(unix)]
                Some(EISDIR) => FsError::IsADirectory(path),
                _ => FsError::Io { path, source },
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }

    /// True for faults caused by a path existing as the wrong kind of entry.
    pub fn is_wrong_type(&self) -> bool {
        matches!(
            self,
            FsError::AlreadyExists(_) | FsError::NotADirectory(_) | FsError::IsADirectory(_)
        )
    }
}
