//! Error taxonomy for table construction.

use thiserror::Error;

/// Failures are limited to invalid construction parameters; `set` and
/// `get` on a built table never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl TableError {
    pub(crate) fn zero_capacity() -> Self {
        TableError::InvalidArgument("capacity must be at least 1".to_string())
    }

    pub(crate) fn unallocatable(capacity: usize) -> Self {
        TableError::InvalidArgument(format!(
            "capacity {} exceeds the allocatable bucket count",
            capacity
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: the display text names the offending argument.
    #[test]
    fn zero_capacity_message() {
        let e = TableError::zero_capacity();
        assert_eq!(e.to_string(), "invalid argument: capacity must be at least 1");
        assert!(matches!(e, TableError::InvalidArgument(_)));

        let e = TableError::unallocatable(7);
        assert_eq!(
            e.to_string(),
            "invalid argument: capacity 7 exceeds the allocatable bucket count"
        );
    }
}
