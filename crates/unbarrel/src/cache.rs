//! Memoization of resolved barrels, keyed by absolute directory.
//!
//! Entries are never invalidated: barrel contents are assumed immutable for
//! the lifetime of the cache. Long-lived hosts that watch files call
//! [`ExportGraphCache::clear`] themselves.
//!
//! Each key owns a [`OnceCell`], so concurrent callers asking for the same
//! directory run at most one resolution; the others block until it finishes.
//! A failed resolution leaves the cell empty and nothing is cached.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::OnceCell;

use crate::error::ResolveError;
use crate::exports::ResolvedBarrel;

type Slot = Arc<OnceCell<Arc<ResolvedBarrel>>>;

#[derive(Debug, Default)]
pub struct ExportGraphCache {
    entries: DashMap<PathBuf, Slot>,
}

impl ExportGraphCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached barrel for `dir`, or run `resolve` to produce it.
    pub fn get_or_try_insert<F>(&self, dir: &Path, resolve: F) -> Result<Arc<ResolvedBarrel>, ResolveError>
    where
        F: FnOnce() -> Result<ResolvedBarrel, ResolveError>,
    {
        // Clone the slot out so the shard lock is not held while resolving
        let slot: Slot = self
            .entries
            .entry(dir.to_path_buf())
            .or_default()
            .value()
            .clone();

        slot.get_or_try_init(|| resolve().map(Arc::new)).cloned()
    }

    /// Cached barrel for `dir`, if resolved already.
    pub fn get(&self, dir: &Path) -> Option<Arc<ResolvedBarrel>> {
        self.entries
            .get(dir)
            .and_then(|slot| slot.value().get().cloned())
    }

    pub fn contains(&self, dir: &Path) -> bool {
        self.get(dir).is_some()
    }

    /// Number of resolved barrels.
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
