//! Chained hash table used to index graph nodes by key
//!
//! Keys are placed in one of `capacity` buckets by `hash(key) % capacity`;
//! collisions chain within the bucket. The table grows when the share of
//! occupied buckets reaches [`RESIZE_THRESHOLD`]: capacity doubles and every
//! entry is rehashed.
//!
//! Absent keys are modelled as `Option::None`. `put` rejects them with
//! [`WaypathError::InvalidKey`], lookups report them as not found, and
//! `contains_key` answers `false`.

use std::collections::hash_map::RandomState;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use crate::error::{Result, WaypathError};

/// Default number of buckets
pub const DEFAULT_CAPACITY: usize = 64;

/// Occupied-bucket ratio that triggers a resize
pub const RESIZE_THRESHOLD: f64 = 0.8;

/// Single key/value pair stored in a bucket chain
#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Hash table with separate chaining and occupancy-driven growth
#[derive(Debug, Clone)]
pub struct HashTable<K, V, S = RandomState> {
    buckets: Vec<Vec<Entry<K, V>>>,
    len: usize,
    occupied: usize,
    hasher: S,
}

impl<K, V> HashTable<K, V, RandomState> {
    /// Create an empty table with [`DEFAULT_CAPACITY`] buckets
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty table with `capacity` buckets (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V> Default for HashTable<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Create an empty table using `hasher` to place keys
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            buckets: empty_buckets(capacity.max(1)),
            len: 0,
            occupied: 0,
            hasher,
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of buckets holding at least one entry
    pub fn occupied_buckets(&self) -> usize {
        self.occupied
    }

    /// Occupied buckets over capacity
    pub fn load_factor(&self) -> f64 {
        self.occupied as f64 / self.capacity() as f64
    }

    /// Remove every entry, keeping the current capacity
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
        self.occupied = 0;
    }

    /// All keys, in bucket order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// All values, in bucket order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// All entries, in bucket order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|entry| (&entry.key, &entry.value)))
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq + Debug,
    S: BuildHasher,
{
    /// Insert a new entry.
    ///
    /// Fails with [`WaypathError::InvalidKey`] for an absent key and with
    /// [`WaypathError::DuplicateKey`] if the key is already stored.
    pub fn put(&mut self, key: impl Into<Option<K>>, value: V) -> Result<()> {
        let key = key.into().ok_or(WaypathError::InvalidKey)?;
        if self.find(&key).is_some() {
            return Err(WaypathError::duplicate_key(&key));
        }

        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        if bucket.is_empty() {
            self.occupied += 1;
        }
        bucket.push(Entry { key, value });
        self.len += 1;

        if self.load_factor() >= RESIZE_THRESHOLD {
            self.resize();
        }
        Ok(())
    }

    /// Look up the value stored for `key`
    pub fn get<'k>(&self, key: impl Into<Option<&'k K>>) -> Result<&V>
    where
        K: 'k,
    {
        let key = key.into().ok_or_else(absent_key)?;
        self.find(key)
            .map(|(bucket, slot)| &self.buckets[bucket][slot].value)
            .ok_or_else(|| WaypathError::key_not_found(key))
    }

    /// Mutable access to the value stored for `key`
    pub fn get_mut<'k>(&mut self, key: impl Into<Option<&'k K>>) -> Result<&mut V>
    where
        K: 'k,
    {
        let key = key.into().ok_or_else(absent_key)?;
        match self.find(key) {
            Some((bucket, slot)) => Ok(&mut self.buckets[bucket][slot].value),
            None => Err(WaypathError::key_not_found(key)),
        }
    }

    /// Whether `key` is stored; `false` for an absent key
    pub fn contains_key<'k>(&self, key: impl Into<Option<&'k K>>) -> bool
    where
        K: 'k,
    {
        key.into().is_some_and(|key| self.find(key).is_some())
    }

    /// Remove `key` and return its value
    pub fn remove<'k>(&mut self, key: impl Into<Option<&'k K>>) -> Result<V>
    where
        K: 'k,
    {
        let key = key.into().ok_or_else(absent_key)?;
        let (index, slot) = self
            .find(key)
            .ok_or_else(|| WaypathError::key_not_found(key))?;

        let bucket = &mut self.buckets[index];
        let entry = bucket.remove(slot);
        if bucket.is_empty() {
            self.occupied -= 1;
        }
        self.len -= 1;
        Ok(entry.value)
    }

    fn bucket_index(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    fn find(&self, key: &K) -> Option<(usize, usize)> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .position(|entry| entry.key == *key)
            .map(|slot| (index, slot))
    }

    fn resize(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let old = std::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.occupied = 0;

        for entry in old.into_iter().flatten() {
            let index = self.bucket_index(&entry.key);
            let bucket = &mut self.buckets[index];
            if bucket.is_empty() {
                self.occupied += 1;
            }
            bucket.push(entry);
        }

        tracing::debug!(
            capacity = new_capacity,
            entries = self.len,
            occupied = self.occupied,
            "hash_table_resize"
        );
    }
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Vec<Entry<K, V>>> {
    (0..capacity).map(|_| Vec::new()).collect()
}

fn absent_key() -> WaypathError {
    WaypathError::KeyNotFound {
        key: "<none>".to_string(),
    }
}

#[cfg(test)]
mod tests;
