//! fstree - tree operations over interchangeable filesystems
//!
//! Recursive directory creation, recursive listing, recursive copy and package scaffolding,
//! written once against the [`FileSystem`] trait and run unchanged against either the host
//! filesystem ([`RealFileSystem`]) or an in-memory store ([`MemoryFileSystem`]).
//!
//! # Example
//!
//! ```
//! use fstree::{copy, list, MemoryFileSystem, PathOrigin};
//!
//! let source = MemoryFileSystem::new();
//! source.add_file("/fixture/a.txt", "a").unwrap();
//! source.add_file("/fixture/sub/b.txt", "b").unwrap();
//!
//! let target = MemoryFileSystem::new();
//! copy(
//!     &PathOrigin::new(&source, "/fixture"),
//!     &PathOrigin::new(&target, "/work"),
//! )
//! .unwrap();
//!
//! let mut files = list("/work", &target, None).unwrap();
//! files.sort();
//! assert_eq!(files, vec!["a.txt", "sub/b.txt"]);
//! ```
//!
//! # Project Structure
//!
//! - [`fs`]: the [`FileSystem`] trait and its two stores
//! - [`path`]: slash-separated path segment helpers
//! - [`tree`]: `mkdirp`, `list`, `copy`, `create_file`
//! - [`scaffold`]: fake installed packages for test setups

pub mod config;
pub mod error;
pub mod fs;
pub mod origin;
pub mod path;
pub mod scaffold;
pub mod tree;
pub mod util;

pub use config::{ConfigError, ScaffoldConfig};
pub use error::{FsError, Result};
pub use fs::{FileSystem, MemoryFileSystem, RealFileSystem};
pub use origin::PathOrigin;
pub use scaffold::{create_module, create_module_with, ModuleDescriptor};
pub use tree::{copy, create_file, list, mkdirp};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
