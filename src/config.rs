//! Construction parameters, with an environment override for capacity.

use crate::error::TableError;
use crate::shared::SharedTable;
use crate::table::LookupTable;
use log::debug;
use std::env::VarError;

/// Bucket count used when nothing else is configured.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Variable read by [`TableConfig::from_env`].
pub const CAPACITY_ENV_VAR: &str = "CHAINED_LOOKUP_CAPACITY";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TableConfig {
    pub capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl TableConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Reads [`CAPACITY_ENV_VAR`]; falls back to the default when unset.
    pub fn from_env() -> Result<Self, TableError> {
        Self::from_env_var(CAPACITY_ENV_VAR)
    }

    pub fn from_env_var(name: &str) -> Result<Self, TableError> {
        Self::from_lookup(name, std::env::var(name))
    }

    fn from_lookup(name: &str, lookup: Result<String, VarError>) -> Result<Self, TableError> {
        match lookup {
            Ok(raw) => {
                let capacity = parse_capacity(&raw)?;
                debug!("{}={} overrides table capacity", name, capacity);
                Ok(Self { capacity })
            }
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(TableError::InvalidArgument(format!(
                "{} is not valid unicode",
                name
            ))),
        }
    }

    pub fn build(&self) -> Result<LookupTable, TableError> {
        LookupTable::new(self.capacity)
    }

    pub fn build_shared(&self) -> Result<SharedTable, TableError> {
        Ok(SharedTable::from_table(self.build()?))
    }
}

/// Parses a positive bucket count. Negative and zero values are rejected.
pub fn parse_capacity(raw: &str) -> Result<usize, TableError> {
    let trimmed = raw.trim();
    let n: i128 = trimmed.parse().map_err(|_| {
        TableError::InvalidArgument(format!("capacity {:?} is not an integer", raw))
    })?;
    if n <= 0 {
        return Err(TableError::InvalidArgument(format!(
            "capacity must be positive, got {}",
            n
        )));
    }
    usize::try_from(n)
        .map_err(|_| TableError::InvalidArgument(format!("capacity {} is too large", n)))
}
