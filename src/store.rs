// src/store.rs
// In-memory pattern catalog shared across request handlers

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::model::Pattern;

/// Thread-safe collection of patterns keyed by id.
///
/// Construct once at startup and share it behind an `Arc`. Every write is a
/// single map operation under the write lock, so readers observe an entry
/// either before or after a write, never in between.
#[derive(Debug, Default)]
pub struct PatternStore {
    patterns: RwLock<HashMap<String, Pattern>>,
}

impl PatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `patterns`. Later entries win on id clashes.
    pub fn with_patterns(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        let map = patterns
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect::<HashMap<_, _>>();
        Self {
            patterns: RwLock::new(map),
        }
    }

    // A panic while holding the lock cannot leave a half-written entry behind,
    // so a poisoned lock is safe to keep using.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Pattern>> {
        self.patterns.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Pattern>> {
        self.patterns.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All stored patterns, in no particular order
    pub fn list_all(&self) -> Vec<Pattern> {
        self.read().values().cloned().collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Pattern> {
        self.read().get(id).cloned()
    }

    pub fn list_by_quadrant(&self, quadrant: &str) -> Vec<Pattern> {
        self.filter(|p| p.in_quadrant(quadrant))
    }

    pub fn list_by_ring(&self, ring: &str) -> Vec<Pattern> {
        self.filter(|p| p.in_ring(ring))
    }

    fn filter(&self, keep: impl Fn(&Pattern) -> bool) -> Vec<Pattern> {
        self.read().values().filter(|p| keep(*p)).cloned().collect()
    }

    /// Insert a pattern under its own id, replacing any existing entry.
    pub fn create(&self, pattern: Pattern) -> Pattern {
        let replaced = self
            .write()
            .insert(pattern.id.clone(), pattern.clone())
            .is_some();
        debug!(id = %pattern.id, replaced, "Pattern stored");
        pattern
    }

    /// Replace an existing pattern wholesale. The stored id is always `id`,
    /// whatever the incoming pattern carried. Returns `None` without touching
    /// the store when `id` is unknown.
    pub fn update(&self, id: &str, mut pattern: Pattern) -> Option<Pattern> {
        let mut patterns = self.write();
        let slot = patterns.get_mut(id)?;
        pattern.id = id.to_string();
        *slot = pattern.clone();
        drop(patterns);

        debug!(id, "Pattern updated");
        Some(pattern)
    }

    /// Remove a pattern. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> bool {
        let removed = self.write().remove(id).is_some();
        debug!(id, removed, "Pattern delete");
        removed
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
