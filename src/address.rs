//! Positional hash: maps a key to a bucket index in `[0, capacity)`.
//!
//! For the character at position `i` with ordinal `c`, the running value
//! becomes `(h + c * i) mod capacity`. The first character always
//! contributes zero, so keys that differ only in their first character
//! collide. That distribution is part of the table's observable behavior
//! and is kept as is.

use core::num::NonZeroUsize;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PositionalHash {
    capacity: NonZeroUsize,
}

impl PositionalHash {
    pub fn new(capacity: NonZeroUsize) -> Self {
        PositionalHash { capacity }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Bucket index for `key`. Positions count Unicode scalar values, not
    /// bytes.
    pub fn address(&self, key: &str) -> usize {
        // h < capacity and c * i < 2^21 * 2^64, so the sum fits in u128.
        let modulus = self.capacity.get() as u128;
        let h = key
            .chars()
            .enumerate()
            .fold(0u128, |h, (i, c)| (h + u128::from(c as u32) * i as u128) % modulus);
        h as usize
    }
}
