//! Recursive tree operations written only against [`FileSystem`]
//!
//! Nothing here knows which store it is talking to. The same calls run against
//! [`RealFileSystem`](crate::fs::RealFileSystem) in production and
//! [`MemoryFileSystem`](crate::fs::MemoryFileSystem) in tests.
//!
//! Store faults are returned unchanged. There is no retry and no rollback: a failure part way
//! through [`copy`] leaves the files already written in place.

use crate::error::Result;
use crate::fs::FileSystem;
use crate::origin::PathOrigin;
use crate::path;
use tracing::{debug, trace};

/// Ensures every directory from the store root down to `origin.path` exists.
///
/// Prefixes of the path as written are visited shortest first and only missing ones are
/// created, so calling this on an existing path is a no-op. `..` is not collapsed beforehand:
/// `/a/../b` creates `/a` before `/b`.
pub fn mkdirp(origin: &PathOrigin<'_>) -> Result<()> {
    let mut created = 0usize;

    for prefix in path::prefixes(&origin.path) {
        if !origin.store.exists(&prefix) {
            origin.store.mkdir(&prefix)?;
            created += 1;
        }
    }

    debug!(path = %origin.path, created, "Ensured directory path");
    Ok(())
}

/// Lists every regular file below `dir`, at any depth.
///
/// Results are relative to `base`, which defaults to `dir`. Directories themselves never
/// appear, so a tree holding only empty directories lists as empty. Order follows the store's
/// enumeration order; callers should treat the result as a set.
pub fn list(dir: &str, store: &dyn FileSystem, base: Option<&str>) -> Result<Vec<String>> {
    let base = base.unwrap_or(dir);
    let mut files = Vec::new();

    for name in store.read_dir(dir)? {
        let entry = path::resolve(dir, &name);
        if store.is_dir(&entry) {
            trace!(dir = %entry, "Descending");
            files.extend(list(&entry, store, Some(base))?);
        } else {
            files.push(path::relative(base, &entry));
        }
    }

    Ok(files)
}

/// Copies every file under `from` to the same relative position under `to`.
///
/// The two origins may share a store. Missing destination directories are created and
/// existing destination files are overwritten.
pub fn copy(from: &PathOrigin<'_>, to: &PathOrigin<'_>) -> Result<()> {
    let files = list(&from.path, from.store, None)?;

    for relative in &files {
        let source = path::resolve(&from.path, relative);
        let target = to.join(relative);

        mkdirp(&target.parent())?;
        let contents = from.store.read_file(&source)?;
        target.store.write_file(&target.path, &contents)?;
        trace!(from = %source, to = %target.path, bytes = contents.len(), "Copied file");
    }

    debug!(from = %from.path, to = %to.path, files = files.len(), "Copied tree");
    Ok(())
}

/// Writes `contents` to `origin.path`, creating the parent directories first.
pub fn create_file(origin: &PathOrigin<'_>, contents: impl AsRef<[u8]>) -> Result<()> {
    mkdirp(&origin.parent())?;
    origin.store.write_file(&origin.path, contents.as_ref())
}
