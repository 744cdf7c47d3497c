//! Keyed node index backing the graph store
//!
//! A thin generic map used to look nodes up by identity. Enumeration
//! order is unspecified; lookups are O(1) expected.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{CampusError, Result};

/// Generic key → value index.
///
/// `get` fails with [`CampusError::UnknownLocation`] when the key is
/// absent; `contains_key` is the non-failing existence check.
#[derive(Debug, Clone)]
pub struct KeyIndex<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Default for KeyIndex<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + fmt::Display, V> KeyIndex<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous value when overwriting.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: &K) -> Result<&V> {
        self.entries
            .get(key)
            .ok_or_else(|| CampusError::unknown_location(key))
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| CampusError::unknown_location(key))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}
