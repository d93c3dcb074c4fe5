use super::FileSystem;
use crate::error::{FsError, Result};
use crate::path;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    Directory,
}

/// In-memory backing store.
///
/// Entries are keyed by normalized absolute path. Relative paths are anchored at `/`, which
/// always exists. Directory listings come back in lexicographic order.
#[derive(Debug)]
pub struct MemoryFileSystem {
    nodes: RwLock<BTreeMap<String, Node>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(String::from("/"), Node::Directory);
        Self {
            nodes: RwLock::new(nodes),
        }
    }

    /// Fixture helper: writes a file, creating any missing parent directories.
    ///
    /// Fails without touching the store if an ancestor is a file or `path` is a directory.
    pub fn add_file(&self, path: &str, contents: impl AsRef<[u8]>) -> Result<()> {
        let key = Self::key(path);
        let mut nodes = self.write();

        if let Some(Node::Directory) = nodes.get(&key) {
            return Err(FsError::IsADirectory(key));
        }
        Self::ensure_parents(&mut nodes, &path::parent(&key))?;

        nodes.insert(key, Node::File(contents.as_ref().to_vec()));
        Ok(())
    }

    /// Fixture helper: creates a directory and all of its ancestors.
    pub fn add_dir(&self, path: &str) -> Result<()> {
        let key = Self::key(path);
        let mut nodes = self.write();

        Self::ensure_parents(&mut nodes, &key)
    }

    fn key(path: &str) -> String {
        path::normalize(&path::join("/", path))
    }

    fn ensure_parents(nodes: &mut BTreeMap<String, Node>, dir: &str) -> Result<()> {
        let prefixes = path::prefixes(dir);
        if let Some(file) = prefixes
            .iter()
            .find(|prefix| matches!(nodes.get(prefix.as_str()), Some(Node::File(_))))
        {
            return Err(FsError::NotADirectory(file.clone()));
        }

        for prefix in prefixes {
            nodes.entry(prefix).or_insert(Node::Directory);
        }
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Node>> {
        self.nodes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Node>> {
        self.nodes.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_parent(nodes: &BTreeMap<String, Node>, key: &str) -> Result<()> {
        let parent = path::parent(key);
        match nodes.get(&parent) {
            Some(Node::Directory) => Ok(()),
            Some(Node::File(_)) => Err(FsError::NotADirectory(parent)),
            None => Err(FsError::NotFound(key.to_string())),
        }
    }
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &str) -> bool {
        self.read().contains_key(&Self::key(path))
    }

    fn is_dir(&self, path: &str) -> bool {
        matches!(self.read().get(&Self::key(path)), Some(Node::Directory))
    }

    fn mkdir(&self, path: &str) -> Result<()> {
        let key = Self::key(path);
        let mut nodes = self.write();

        if nodes.contains_key(&key) {
            return Err(FsError::AlreadyExists(key));
        }
        Self::check_parent(&nodes, &key)?;

        nodes.insert(key, Node::Directory);
        Ok(())
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let key = Self::key(path);
        match self.read().get(&key) {
            Some(Node::File(contents)) => Ok(contents.clone()),
            Some(Node::Directory) => Err(FsError::IsADirectory(key)),
            None => Err(FsError::NotFound(key)),
        }
    }

    fn write_file(&self, path: &str, contents: &[u8]) -> Result<()> {
        let key = Self::key(path);
        let mut nodes = self.write();

        if let Some(Node::Directory) = nodes.get(&key) {
            return Err(FsError::IsADirectory(key));
        }
        Self::check_parent(&nodes, &key)?;

        nodes.insert(key, Node::File(contents.to_vec()));
        Ok(())
    }

    fn read_dir(&self, path: &str) -> Result<Vec<String>> {
        let key = Self::key(path);
        let nodes = self.read();

        match nodes.get(&key) {
            Some(Node::Directory) => {}
            Some(Node::File(_)) => return Err(FsError::NotADirectory(key)),
            None => return Err(FsError::NotFound(key)),
        }

        let prefix = if key == "/" { key } else { format!("{}/", key) };
        let names = nodes
            .range(prefix.clone()..)
            .map(|(child, _)| child)
            .take_while(|child| child.starts_with(&prefix))
            .map(|child| &child[prefix.len()..])
            .filter(|rest| !rest.is_empty() && !rest.contains('/'))
            .map(str::to_string)
            .collect();

        Ok(names)
    }
}
