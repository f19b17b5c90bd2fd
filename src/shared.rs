//! SharedTable: cloneable handle that serializes access to one table.

use crate::error::TableError;
use crate::table::LookupTable;
use parking_lot::Mutex;
use std::sync::Arc;

/// Clones share the same underlying [`LookupTable`]. Each call holds the
/// lock only for its own duration; values come back owned.
#[derive(Clone, Debug)]
pub struct SharedTable {
    inner: Arc<Mutex<LookupTable>>,
}

impl SharedTable {
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        Ok(Self::from_table(LookupTable::new(capacity)?))
    }

    pub fn from_table(table: LookupTable) -> Self {
        Self {
            inner: Arc::new(Mutex::new(table)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.lock().set(key, value);
    }

    pub fn get(&self, key: &str) -> String {
        self.inner.lock().get(key)
    }

    pub fn find(&self, key: &str) -> Option<String> {
        self.inner.lock().find(key).map(str::to_owned)
    }
}
