//! chained-lookup: a fixed-capacity string table with a positional hash
//! and chained buckets.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small in-process lookup structure whose observable behavior
//!   (bucket placement, duplicate handling, the empty-string sentinel) is
//!   pinned down exactly, so it can be compared against an existing
//!   deployment key for key.
//! - Layers:
//!   - PositionalHash: `h = (h + c * i) mod capacity` over the key's
//!     characters; picks the bucket.
//!   - Bucket: append-only chain of `(key, value)` entries.
//!   - LookupTable: owns `capacity` buckets; `set` appends, `get` returns
//!     the first match or `""`.
//!   - SharedTable: `Arc<Mutex<LookupTable>>` handle for callers that
//!     share one table across threads.
//!
//! Constraints
//! - Capacity is fixed at construction and must be at least 1.
//! - No removal, resize or iteration over all entries.
//! - Duplicate keys accumulate; the first entry written shadows the rest.
//! - `get` cannot distinguish an absent key from one stored with an
//!   empty value. `find` returns `Option` for callers that need to.
//!
//! Hash distribution
//! - The first character of a key is multiplied by position 0 and never
//!   contributes, so `"ab"` and `"xb"` always share a bucket. Bucket
//!   placement must stay identical to the existing deployment.
//!
//! Notes and non-goals
//! - No eviction: chains grow without bound.
//! - There is no global instance. Build one with [`TableConfig`] (or
//!   [`LookupTable::new`]) and hand it, or a [`SharedTable`], to whoever
//!   needs it.
//! - The crate logs through the `log` facade and never installs a logger.

mod address;
mod bucket;
pub mod config;
mod error;
mod shared;
pub mod table;
mod table_proptest;

// Public surface
pub use address::PositionalHash;
pub use config::{TableConfig, DEFAULT_CAPACITY};
pub use error::TableError;
pub use shared::SharedTable;
pub use table::LookupTable;
