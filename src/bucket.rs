//! Bucket: an append-only chain of key/value entries.

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) key: String,
    pub(crate) value: String,
}

/// Entries in insertion order. Duplicate keys are kept; lookups see the
/// earliest one. An empty chain does not allocate until its first push.
#[derive(Clone, Debug, Default)]
pub(crate) struct Bucket {
    chain: Vec<Entry>,
}

impl Bucket {
    pub(crate) const fn new() -> Self {
        Bucket { chain: Vec::new() }
    }

    pub(crate) fn push(&mut self, key: String, value: String) {
        self.chain.push(Entry { key, value });
    }

    /// Value of the first entry whose key equals `key`.
    pub(crate) fn first(&self, key: &str) -> Option<&str> {
        self.chain
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// `(key, value)` pairs in insertion order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.chain
            .iter()
            .map(|e| (e.key.as_str(), e.value.as_str()))
    }

    pub(crate) fn len(&self) -> usize {
        self.chain.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
