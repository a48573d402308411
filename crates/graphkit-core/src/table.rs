//! Hash-table containers with explicit collision-resolution strategies.
//!
//! Three variants share one capacity-dependent hash:
//!
//! - [`chained::ChainedTable`] — separate chaining at fixed capacity.
//! - [`chained::ResizingTable`] — separate chaining that doubles capacity
//!   when the load factor crosses [`MAX_LOAD_FACTOR`].
//! - [`probed::ProbingTable`] — open addressing with linear probing and
//!   cluster rehash on deletion.
//!
//! The hash is a polynomial accumulator over the key's bytes, reduced by the
//! bucket count at every step. Because the bucket count participates in the
//! hash itself, any capacity change forces a full rehash of stored entries.
pub mod chained;
pub mod probed;

/// Default bucket count for tables built with `new()`.
pub const DEFAULT_CAPACITY: usize = 53;

/// Load-factor threshold above which the resizing variants double capacity.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// Multiplier of the polynomial accumulator.
const HASH_PRIME: u64 = 31;

/// Upper bound on hashed bytes, so pathological keys cost O(1) to hash.
const MAX_HASHED_BYTES: usize = 100;

/// A key usable in the table variants: equality plus a capacity-dependent
/// bucket mapping.
pub trait BucketKey: Eq {
    /// Maps the key to a bucket index in `[0, capacity)`.
    ///
    /// Must be stable for a fixed `(key, capacity)` pair. `capacity` is
    /// always at least 1 when called by the table types.
    fn bucket(&self, capacity: usize) -> usize;
}

/// Folds `total = (total * 31 + byte) % capacity` over at most
/// [`MAX_HASHED_BYTES`] bytes.
fn polynomial_bucket(bytes: &[u8], capacity: usize) -> usize {
    if capacity <= 1 {
        return 0;
    }
    let modulus = capacity as u64;
    let mut total: u64 = 0;
    for &byte in bytes.iter().take(MAX_HASHED_BYTES) {
        total = (total * HASH_PRIME + u64::from(byte)) % modulus;
    }
    total as usize
}

impl BucketKey for String {
    fn bucket(&self, capacity: usize) -> usize {
        polynomial_bucket(self.as_bytes(), capacity)
    }
}

impl BucketKey for u32 {
    fn bucket(&self, capacity: usize) -> usize {
        polynomial_bucket(&self.to_le_bytes(), capacity)
    }
}

impl BucketKey for u64 {
    fn bucket(&self, capacity: usize) -> usize {
        polynomial_bucket(&self.to_le_bytes(), capacity)
    }
}

impl BucketKey for usize {
    fn bucket(&self, capacity: usize) -> usize {
        polynomial_bucket(&self.to_le_bytes(), capacity)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
