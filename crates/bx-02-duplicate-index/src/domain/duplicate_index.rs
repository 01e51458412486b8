//! # Duplicate Index
//!
//! Thin wrapper over `HashMap` that gives the serving layer a narrow,
//! intention-revealing API. Lookups accept any borrowed form of the key, so a
//! `DuplicateIndex<String, _>` can be queried with `&str`.

use super::errors::LookupError;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Map from a record's natural key to its store identifier.
#[derive(Debug, Clone)]
pub struct DuplicateIndex<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> DuplicateIndex<K, V> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates an empty index able to hold `capacity` keys without rehashing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Returns true if `key` has been registered.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Registers `key`, overwriting any earlier identifier.
    ///
    /// Returns the identifier previously registered for `key`, if any.
    pub fn set(&mut self, key: K, identifier: V) -> Option<V> {
        self.entries.insert(key, identifier)
    }

    /// Returns the identifier registered for `key`.
    ///
    /// # Errors
    /// - `NotFound` if `key` was never registered
    pub fn get<Q>(&self, key: &Q) -> Result<&V, LookupError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).ok_or(LookupError::NotFound)
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry. Used before a rebuild from the store.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Eq + Hash, V> Default for DuplicateIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for DuplicateIndex<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
