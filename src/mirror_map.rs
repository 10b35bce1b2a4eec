//! Reference container with the `TierMap` method surface, backed by
//! `hashbrown::HashMap`.
//!
//! Used as the behavioral oracle: replaying an operation sequence here and
//! on a [`TierMap`](crate::TierMap) must produce the same observable
//! results for every method, apart from pointer identity and invalidation
//! timing.

use crate::traits::{TierKey, TierValue};
use core::hash::Hash;
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

pub struct MirrorMap<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> MirrorMap<K, V>
where
    K: TierKey + Hash,
    V: TierValue,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the stored value, or the empty value if absent.
    pub fn get(&self, key: K) -> V
    where
        V: Clone,
    {
        debug_assert!(key != K::EMPTY_KEY && key != K::REMOVED_KEY);
        match self.entries.get(&key) {
            Some(value) => value.clone(),
            None => V::empty(),
        }
    }

    pub fn get_ref(&self, key: K) -> Option<&V> {
        debug_assert!(key != K::EMPTY_KEY && key != K::REMOVED_KEY);
        self.entries.get(&key)
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        debug_assert!(key != K::EMPTY_KEY && key != K::REMOVED_KEY);
        self.entries.get_mut(&key)
    }

    /// Inserts or overwrites, returning a borrow of the stored value.
    pub fn set(&mut self, key: K, value: V) -> &mut V {
        debug_assert!(key != K::EMPTY_KEY && key != K::REMOVED_KEY);
        debug_assert!(!value.is_empty());
        match self.entries.entry(key) {
            Entry::Occupied(slot) => {
                let slot = slot.into_mut();
                *slot = value;
                slot
            }
            Entry::Vacant(slot) => slot.insert(value),
        }
    }

    /// Inserts only if absent; returns the already-stored value otherwise.
    pub fn set_if_new(&mut self, key: K, value: V) -> Option<&mut V> {
        debug_assert!(key != K::EMPTY_KEY && key != K::REMOVED_KEY);
        debug_assert!(!value.is_empty());
        match self.entries.entry(key) {
            Entry::Occupied(slot) => Some(slot.into_mut()),
            Entry::Vacant(slot) => {
                slot.insert(value);
                None
            }
        }
    }

    pub fn remove(&mut self, key: K) {
        debug_assert!(key != K::EMPTY_KEY && key != K::REMOVED_KEY);
        self.entries.remove(&key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Capacity hints have no observable effect on the reference container.
    pub fn reserve(&mut self, _array_capacity: usize, _hash_capacity: usize, _force_clean: bool) {}

    /// Calls `action` per entry in unspecified order; `true` stops early.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(K, &V) -> bool,
    {
        for (key, value) in &self.entries {
            if action(*key, value) {
                return;
            }
        }
    }

    /// Deterministic pick of a present key, for tests that need "some key".
    pub fn nth_key(&self, n: usize) -> Option<K> {
        if self.entries.is_empty() {
            None
        } else {
            self.entries.keys().nth(n % self.entries.len()).copied()
        }
    }
}

impl<K, V> Default for MirrorMap<K, V>
where
    K: TierKey + Hash,
    V: TierValue,
{
    fn default() -> Self {
        Self::new()
    }
}
