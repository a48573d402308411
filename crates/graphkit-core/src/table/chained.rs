//! Separate-chaining hash tables.
//!
//! [`ChainedTable`] keeps a fixed bucket count for its whole life; chains
//! simply grow under load. [`ResizingTable`] tracks its entry count and
//! doubles the bucket count once the load factor exceeds
//! [`MAX_LOAD_FACTOR`](crate::table::MAX_LOAD_FACTOR), reinserting every
//! entry because the hash is capacity-dependent.
//!
//! Both uphold the chaining invariant: a key appears at most once across all
//! buckets. `set` scans the target chain for the key before appending.
use crate::table::{BucketKey, DEFAULT_CAPACITY, MAX_LOAD_FACTOR};

// ---------------------------------------------------------------------------
// ChainedTable
// ---------------------------------------------------------------------------

/// A fixed-capacity separate-chaining hash table.
#[derive(Debug, Clone)]
pub struct ChainedTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
}

impl<K: BucketKey, V> ChainedTable<K, V> {
    /// Creates a table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a table with `capacity` buckets (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: (0..capacity.max(1)).map(|_| Vec::new()).collect(),
        }
    }

    /// Returns the bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Inserts or replaces the value for `key`.
    pub fn set(&mut self, key: K, value: V) {
        let index = key.bucket(self.buckets.len());
        let chain = &mut self.buckets[index];
        for entry in chain.iter_mut() {
            if entry.0 == key {
                entry.1 = value;
                return;
            }
        }
        chain.push((key, value));
    }

    /// Returns the value for `key`, or `None` if absent.
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = key.bucket(self.buckets.len());
        self.buckets
            .get(index)?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, reporting whether an entry was actually deleted.
    pub fn remove(&mut self, key: &K) -> bool {
        let index = key.bucket(self.buckets.len());
        let Some(chain) = self.buckets.get_mut(index) else {
            return false;
        };
        match chain.iter().position(|(k, _)| k == key) {
            Some(pos) => {
                chain.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Returns every stored key, in bucket-then-chain order.
    pub fn keys(&self) -> Vec<&K> {
        self.buckets.iter().flatten().map(|(k, _)| k).collect()
    }

    /// Returns every stored value, in bucket-then-chain order.
    pub fn values(&self) -> Vec<&V> {
        self.buckets.iter().flatten().map(|(_, v)| v).collect()
    }

    /// Returns the number of stored entries. O(capacity): chains are
    /// scanned, the fixed variant does not track a count.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Entries divided by bucket count. May exceed 1.0: this variant never
    /// resizes, chains just grow.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.buckets.len() as f64
    }
}

impl<K: BucketKey, V> Default for ChainedTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// ResizingTable
// ---------------------------------------------------------------------------

/// A separate-chaining hash table that doubles its bucket count when the
/// load factor exceeds `MAX_LOAD_FACTOR` after an insert.
#[derive(Debug, Clone)]
pub struct ResizingTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
}

impl<K: BucketKey, V> ResizingTable<K, V> {
    /// Creates a table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a table with `capacity` buckets (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: (0..capacity.max(1)).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Returns the current bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Inserts or replaces the value for `key`, growing the table if the
    /// insert pushed the load factor over the threshold.
    pub fn set(&mut self, key: K, value: V) {
        let index = key.bucket(self.buckets.len());
        let chain = &mut self.buckets[index];
        for entry in chain.iter_mut() {
            if entry.0 == key {
                entry.1 = value;
                return;
            }
        }
        chain.push((key, value));
        self.len += 1;

        if self.load_factor() > MAX_LOAD_FACTOR {
            self.resize(self.buckets.len() * 2);
        }
    }

    /// Returns the value for `key`, or `None` if absent.
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = key.bucket(self.buckets.len());
        self.buckets
            .get(index)?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, reporting whether an entry was actually deleted.
    /// Shrinking never happens; capacity only grows.
    pub fn remove(&mut self, key: &K) -> bool {
        let index = key.bucket(self.buckets.len());
        let Some(chain) = self.buckets.get_mut(index) else {
            return false;
        };
        match chain.iter().position(|(k, _)| k == key) {
            Some(pos) => {
                chain.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries divided by bucket count; kept at or below the threshold by
    /// `set`.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Rebuilds the table at `new_capacity`. Every entry is reinserted
    /// because the hash is a function of the bucket count.
    fn resize(&mut self, new_capacity: usize) {
        let old = std::mem::replace(
            &mut self.buckets,
            (0..new_capacity.max(1)).map(|_| Vec::new()).collect(),
        );
        self.len = 0;
        for (key, value) in old.into_iter().flatten() {
            self.set(key, value);
        }
    }
}

impl<K: BucketKey, V> Default for ResizingTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
