//! LookupTable: fixed bucket array with chained collision resolution.

use crate::address::PositionalHash;
use crate::bucket::Bucket;
use crate::error::TableError;
use core::num::NonZeroUsize;
use log::{debug, trace, warn};

/// String-to-string table with a capacity fixed at construction.
///
/// Entries are only ever appended. A repeated `set` for the same key adds
/// another entry behind the first, and `get` keeps returning the first.
#[derive(Clone, Debug)]
pub struct LookupTable {
    hash: PositionalHash,
    buckets: Box<[Bucket]>,
    len: usize,
}

impl LookupTable {
    /// Build a table with `capacity` empty buckets. Zero is rejected, as is
    /// a capacity whose bucket array cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        let Some(cap) = NonZeroUsize::new(capacity) else {
            warn!("rejecting lookup table with zero capacity");
            return Err(TableError::zero_capacity());
        };
        debug!("creating lookup table: capacity={}", capacity);
        let mut buckets: Vec<Bucket> = Vec::new();
        if let Err(e) = buckets.try_reserve_exact(capacity) {
            warn!("rejecting lookup table: capacity={} ({})", capacity, e);
            return Err(TableError::unallocatable(capacity));
        }
        buckets.resize_with(capacity, Bucket::new);
        Ok(Self {
            hash: PositionalHash::new(cap),
            buckets: buckets.into_boxed_slice(),
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.hash.capacity()
    }

    /// Total number of stored entries, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn bucket(&self, index: usize) -> Option<&Bucket> {
        self.buckets.get(index)
    }

    /// Bucket index that `key` maps to in this table.
    pub fn address(&self, key: &str) -> usize {
        self.hash.address(key)
    }

    /// Number of entries chained in bucket `index`; 0 when out of range.
    pub fn chain_len(&self, index: usize) -> usize {
        self.buckets.get(index).map(Bucket::len).unwrap_or(0)
    }

    /// Append `(key, value)` to the bucket `key` addresses. Never fails and
    /// never replaces an earlier entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let index = self.hash.address(&key);
        trace!("set: key={:?} address={}", key, index);
        self.buckets[index].push(key, value.into());
        self.len += 1;
    }

    /// Value of the first entry stored under `key`, or `None` if the key was
    /// never set.
    pub fn find(&self, key: &str) -> Option<&str> {
        let index = self.hash.address(key);
        let bucket = &self.buckets[index];
        if bucket.is_empty() {
            return None;
        }
        bucket.first(key)
    }

    /// Like [`find`](Self::find) but reports an absent key as `""`, so an
    /// absent key and a key stored with an empty value look the same.
    pub fn get(&self, key: &str) -> String {
        let found = self.find(key);
        trace!("get: key={:?} hit={}", key, found.is_some());
        found.unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: zero capacity is rejected with `InvalidArgument`.
    #[test]
    fn zero_capacity_rejected() {
        match LookupTable::new(0) {
            Err(TableError::InvalidArgument(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    /// Invariant: capacities too large to allocate return `InvalidArgument`
    /// instead of aborting.
    #[test]
    fn oversized_capacity_rejected() {
        for capacity in [usize::MAX, usize::MAX / 2] {
            match LookupTable::new(capacity) {
                Err(TableError::InvalidArgument(msg)) => assert!(msg.contains("capacity")),
                other => panic!("unexpected result for {}: {:?}", capacity, other),
            }
        }
    }

    /// Invariant: a new table has `capacity` empty buckets and no entries.
    #[test]
    fn new_table_is_empty() {
        let t = LookupTable::new(16).unwrap();
        assert_eq!(t.capacity(), 16);
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
        assert!((0..16).all(|i| t.chain_len(i) == 0));
        assert_eq!(t.chain_len(16), 0);
    }

    /// Invariant: with capacity 1000, `room42` round-trips and `room99` is absent.
    #[test]
    fn room_scenario() {
        let mut t = LookupTable::new(1000).unwrap();
        t.set("room42", "available");
        assert_eq!(t.get("room42"), "available");
        assert_eq!(t.get("room99"), "");
        assert_eq!(t.find("room99"), None);
    }

    /// Invariant: the first write for a key wins; later writes are kept but shadowed.
    #[test]
    fn first_write_wins() {
        let mut t = LookupTable::new(8).unwrap();
        t.set("k", "a");
        t.set("k", "b");
        assert_eq!(t.get("k"), "a");
        assert_eq!(t.len(), 2);
        assert_eq!(t.chain_len(t.address("k")), 2);
    }

    /// Invariant: every entry lands in the bucket its key addresses.
    #[test]
    fn entries_land_in_addressed_bucket() {
        let mut t = LookupTable::new(1000).unwrap();
        t.set("room42", "x");
        t.set("room99", "y");
        assert_eq!(t.chain_len(118), 1);
        assert_eq!(t.chain_len(173), 1);
        assert_eq!(t.len(), 2);
    }

    /// Invariant: distinct keys sharing a bucket resolve by key equality.
    #[test]
    fn colliding_keys_resolve_independently() {
        let mut t = LookupTable::new(1000).unwrap();
        // Differ only in the first character, so they share an address.
        assert_eq!(t.address("ab"), t.address("xb"));
        t.set("ab", "x");
        t.set("xb", "y");
        assert_eq!(t.get("ab"), "x");
        assert_eq!(t.get("xb"), "y");
        assert_eq!(t.get("cb"), "");
        assert_eq!(t.chain_len(t.address("ab")), 2);
    }

    /// Invariant: a stored empty value is indistinguishable from absence via
    /// `get`, but `find` tells them apart.
    #[test]
    fn empty_value_sentinel_ambiguity() {
        let mut t = LookupTable::new(4).unwrap();
        t.set("blank", "");
        assert_eq!(t.get("blank"), "");
        assert_eq!(t.get("never"), "");
        assert_eq!(t.find("blank"), Some(""));
        assert_eq!(t.find("never"), None);
    }

    /// Invariant: an empty value stored first shadows a later non-empty one.
    #[test]
    fn empty_first_value_still_shadows() {
        let mut t = LookupTable::new(4).unwrap();
        t.set("k", "");
        t.set("k", "later");
        assert_eq!(t.get("k"), "");
        assert_eq!(t.find("k"), Some(""));
    }
}
