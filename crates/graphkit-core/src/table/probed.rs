//! Open-addressing hash table with linear probing.
//!
//! Entries live directly in the slot array; a collision walks forward one
//! slot at a time (wrapping) until a free slot or the key itself turns up.
//! Lookups stop at the first empty slot, which makes deletion the delicate
//! operation: removing an entry punches a hole into a probe cluster and
//! would hide every entry displaced past it. Instead of tombstones,
//! [`ProbingTable::remove`] lifts the contiguous run of entries after the
//! hole out of the array and reinserts them, which restores the invariant
//! that every entry is reachable from its home bucket without crossing an
//! empty slot.
use crate::table::{BucketKey, DEFAULT_CAPACITY, MAX_LOAD_FACTOR};

/// A linear-probing hash table.
///
/// The load factor is kept strictly below 1.0 (below
/// [`MAX_LOAD_FACTOR`] in fact), so probe loops always terminate at an
/// empty slot.
#[derive(Debug, Clone)]
pub struct ProbingTable<K, V> {
    slots: Vec<Option<(K, V)>>,
    len: usize,
}

impl<K: BucketKey, V> ProbingTable<K, V> {
    /// Creates a table with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a table with `capacity` slots (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity.max(1)).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Returns the slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Inserts or replaces the value for `key`, growing the table if the
    /// insert pushed the load factor over the threshold.
    pub fn set(&mut self, key: K, value: V) {
        let capacity = self.slots.len();
        let mut index = key.bucket(capacity);
        loop {
            let slot = &mut self.slots[index];
            match slot {
                Some(entry) if entry.0 == key => {
                    entry.1 = value;
                    return;
                }
                Some(_) => {
                    index = (index + 1) % capacity;
                }
                None => {
                    *slot = Some((key, value));
                    self.len += 1;
                    break;
                }
            }
        }

        if self.load_factor() > MAX_LOAD_FACTOR {
            self.resize(capacity * 2);
        }
    }

    /// Returns the value for `key`, or `None` if absent.
    ///
    /// The probe walks from the key's home bucket and gives up at the first
    /// empty slot; deletion maintains the cluster invariant that makes this
    /// early exit sound.
    pub fn get(&self, key: &K) -> Option<&V> {
        let capacity = self.slots.len();
        let mut index = key.bucket(capacity);
        loop {
            match &self.slots[index] {
                Some((k, v)) if k == key => return Some(v),
                Some(_) => index = (index + 1) % capacity,
                None => return None,
            }
        }
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, reporting whether an entry was actually deleted.
    ///
    /// After emptying the slot, the contiguous run of entries that follows
    /// it is rehashed so later lookups never stop short at the new hole.
    pub fn remove(&mut self, key: &K) -> bool {
        let capacity = self.slots.len();
        let mut index = key.bucket(capacity);
        loop {
            match &self.slots[index] {
                Some((k, _)) if k == key => break,
                Some(_) => index = (index + 1) % capacity,
                None => return false,
            }
        }

        self.slots[index] = None;
        self.len -= 1;
        self.rehash_cluster((index + 1) % capacity);
        true
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries divided by slot count; kept at or below the threshold by
    /// `set`.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    /// Lifts the occupied run starting at `start` out of the array and
    /// reinserts each entry. The table is never full, so the run is finite.
    fn rehash_cluster(&mut self, start: usize) {
        let capacity = self.slots.len();
        let mut displaced: Vec<(K, V)> = Vec::new();
        let mut index = start;
        while let Some(entry) = self.slots.get_mut(index).and_then(Option::take) {
            displaced.push(entry);
            index = (index + 1) % capacity;
        }
        self.len -= displaced.len();
        for (key, value) in displaced {
            self.set(key, value);
        }
    }

    /// Rebuilds the table at `new_capacity`. Every entry is reinserted
    /// because the hash is a function of the slot count.
    fn resize(&mut self, new_capacity: usize) {
        let old = std::mem::replace(
            &mut self.slots,
            (0..new_capacity.max(1)).map(|_| None).collect(),
        );
        self.len = 0;
        for (key, value) in old.into_iter().flatten() {
            self.set(key, value);
        }
    }
}

impl<K: BucketKey, V> Default for ProbingTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn set_get_round_trip() {
        let mut table = ProbingTable::new();
        table.set("maroon".to_owned(), "#800000");
        table.set("yellow".to_owned(), "#FFFF00");
        table.set("olive".to_owned(), "#808000");
        assert_eq!(table.get(&"maroon".to_owned()), Some(&"#800000"));
        assert_eq!(table.get(&"olive".to_owned()), Some(&"#808000"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn get_missing_key_is_none() {
        let table: ProbingTable<String, u32> = ProbingTable::new();
        assert_eq!(table.get(&"absent".to_owned()), None);
    }

    #[test]
    fn set_replaces_existing_key() {
        let mut table = ProbingTable::with_capacity(8);
        table.set("k".to_owned(), 1);
        table.set("k".to_owned(), 2);
        assert_eq!(table.get(&"k".to_owned()), Some(&2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn colliding_keys_probe_to_later_slots() {
        // Capacity 2 and two entries: the second key necessarily probes
        // past an occupied slot, then the table doubles.
        let mut table = ProbingTable::with_capacity(2);
        table.set("a".to_owned(), 1);
        table.set("b".to_owned(), 2);
        assert_eq!(table.get(&"a".to_owned()), Some(&1));
        assert_eq!(table.get(&"b".to_owned()), Some(&2));
        assert_eq!(table.capacity(), 4);
    }

    #[test]
    fn growth_keeps_every_entry_reachable() {
        let mut table = ProbingTable::with_capacity(4);
        for i in 0..100u32 {
            table.set(i, i * 10);
        }
        assert!(table.capacity() > 4);
        assert!(table.load_factor() <= MAX_LOAD_FACTOR);
        for i in 0..100u32 {
            assert_eq!(table.get(&i), Some(&(i * 10)), "key {i} after growth");
        }
    }

    #[test]
    fn remove_reports_success() {
        let mut table = ProbingTable::new();
        table.set("k".to_owned(), 1);
        assert!(table.remove(&"k".to_owned()));
        assert!(!table.remove(&"k".to_owned()));
        assert_eq!(table.get(&"k".to_owned()), None);
        assert!(table.is_empty());
    }

    #[test]
    fn remove_does_not_hide_displaced_entries() {
        // Pack a small table so probe clusters form, then delete from the
        // middle of them. Without the cluster rehash, entries displaced
        // past a removed slot would become unreachable.
        let mut table = ProbingTable::with_capacity(16);
        let keys: Vec<u32> = (0..10).collect();
        for &k in &keys {
            table.set(k, k);
        }
        // Remove a few keys in arbitrary order; the rest must stay visible.
        for &gone in &[3u32, 7, 0] {
            assert!(table.remove(&gone));
        }
        for &k in &keys {
            if [3, 7, 0].contains(&k) {
                assert_eq!(table.get(&k), None, "key {k} was removed");
            } else {
                assert_eq!(table.get(&k), Some(&k), "key {k} must survive");
            }
        }
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn interleaved_insert_and_remove_stay_consistent() {
        let mut table = ProbingTable::with_capacity(8);
        for i in 0..50u32 {
            table.set(i, i);
            if i % 3 == 0 {
                assert!(table.remove(&i));
            }
        }
        for i in 0..50u32 {
            let expected = if i % 3 == 0 { None } else { Some(&i) };
            assert_eq!(table.get(&i), expected, "key {i}");
        }
    }

    #[test]
    fn minimum_capacity_is_clamped_to_one() {
        let table: ProbingTable<String, u32> = ProbingTable::with_capacity(0);
        assert_eq!(table.capacity(), 1);
    }

    #[test]
    fn load_factor_tracks_len() {
        let mut table = ProbingTable::with_capacity(8);
        assert_eq!(table.load_factor(), 0.0);
        table.set(1u32, ());
        table.set(2u32, ());
        assert_eq!(table.load_factor(), 0.25);
    }
}
