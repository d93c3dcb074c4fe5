//! A path bound to the store it lives in

use crate::fs::FileSystem;
use crate::path;
use std::fmt;

/// Pairs a borrowed backing store with a path inside it.
///
/// The store is shared, never owned: creating or dropping an origin has no effect on the store.
#[derive(Clone)]
pub struct PathOrigin<'a> {
    pub store: &'a dyn FileSystem,
    pub path: String,
}

impl<'a> PathOrigin<'a> {
    pub fn new(store: &'a dyn FileSystem, path: impl Into<String>) -> Self {
        Self {
            store,
            path: path.into(),
        }
    }

    /// Origin for `rest` resolved against this path, in the same store.
    pub fn join(&self, rest: &str) -> PathOrigin<'a> {
        PathOrigin::new(self.store, path::resolve(&self.path, rest))
    }

    /// Origin for the directory containing this path, in the same store.
    pub fn parent(&self) -> PathOrigin<'a> {
        PathOrigin::new(self.store, path::parent(&self.path))
    }
}

impl fmt::Debug for PathOrigin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathOrigin")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
