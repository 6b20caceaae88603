//! Fragment store and merge engine
//!
//! `EnvManager` accumulates validated fragments, then folds them into a
//! single resolved environment by ascending priority. All state lives in
//! memory; the manager is single-writer and never mutated concurrently
//! with a merge or query.

mod search;
mod state;

pub use search::SearchMatch;
pub use state::{load_state, save_state};

use std::collections::BTreeMap;
use time::OffsetDateTime;

use crate::classifier::ComponentRegistry;
use crate::error::Error;
use crate::model::Fragment;

/// Ordered fragment collection plus the merged result.
///
/// Fragments keep insertion order until [`merge`](Self::merge) runs, then
/// stay sorted by priority (stable, so equal priorities keep their
/// relative load order). Everything derived from a merge (the resolved
/// environment, the per-key provenance chains, the merge timestamp) is
/// inaccessible until the first merge completes.
#[derive(Debug, Clone)]
pub struct EnvManager {
    registry: ComponentRegistry,
    fragments: Vec<Fragment>,
    merged: BTreeMap<String, String>,
    key_sources: BTreeMap<String, Vec<String>>,
    sorted: bool,
    merge_time: Option<OffsetDateTime>,
}

impl EnvManager {
    /// Manager with the built-in classification tables
    pub fn new() -> Self {
        Self::with_registry(ComponentRegistry::default())
    }

    /// Manager with injected classification tables
    pub fn with_registry(registry: ComponentRegistry) -> Self {
        Self {
            registry,
            fragments: Vec::new(),
            merged: BTreeMap::new(),
            key_sources: BTreeMap::new(),
            sorted: false,
            merge_time: None,
        }
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Validate and append a fragment.
    ///
    /// Duplicate names are allowed; a rejected fragment leaves the
    /// collection untouched. Adding after a merge leaves the merged
    /// state stale until the next [`merge`](Self::merge).
    pub fn add(&mut self, fragment: Fragment) -> Result<(), Error> {
        self.registry.validate(&fragment)?;
        self.fragments.push(fragment);
        Ok(())
    }

    /// Fragments in current internal order: insertion order before a
    /// merge, priority order after
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Whether a merge has completed
    pub fn is_merged(&self) -> bool {
        self.sorted
    }

    fn require_merged(&self) -> Result<(), Error> {
        if self.sorted {
            Ok(())
        } else {
            Err(Error::NotMerged)
        }
    }

    /// Sort fragments by ascending priority and fold their variables
    /// into the resolved environment.
    ///
    /// Later (higher-priority) fragments overwrite earlier values;
    /// every fragment defining a key is appended to that key's
    /// provenance chain, so the chain's last entry always names the
    /// winner. The fold is fully recomputed each call; merging twice
    /// over an unchanged collection yields identical results.
    pub fn merge(&mut self) {
        self.fragments.sort_by_key(|f| f.priority);

        self.merged.clear();
        self.key_sources.clear();
        for frag in &self.fragments {
            for (key, value) in &frag.env {
                self.merged.insert(key.clone(), value.clone());
                self.key_sources
                    .entry(key.clone())
                    .or_default()
                    .push(frag.name.clone());
            }
        }

        self.sorted = true;
        self.merge_time = Some(OffsetDateTime::now_utc());
    }

    /// The resolved environment; fails with `NotMerged` before the
    /// first merge
    pub fn merged(&self) -> Result<&BTreeMap<String, String>, Error> {
        self.require_merged()?;
        Ok(&self.merged)
    }

    /// Resolved value for one key
    pub fn merged_value(&self, key: &str) -> Result<Option<&str>, Error> {
        self.require_merged()?;
        Ok(self.merged.get(key).map(String::as_str))
    }

    /// Provenance chains: key -> names of every fragment that defined
    /// it, in applied order (last entry wins)
    pub fn key_sources(&self) -> Result<&BTreeMap<String, Vec<String>>, Error> {
        self.require_merged()?;
        Ok(&self.key_sources)
    }

    /// Provenance chain for one key
    pub fn sources_for(&self, key: &str) -> Result<Option<&[String]>, Error> {
        self.require_merged()?;
        Ok(self.key_sources.get(key).map(Vec::as_slice))
    }

    /// Timestamp of the most recent merge
    pub fn merge_time(&self) -> Result<OffsetDateTime, Error> {
        self.merge_time.ok_or(Error::NotMerged)
    }
}

impl Default for EnvManager {
    fn default() -> Self {
        Self::new()
    }
}
