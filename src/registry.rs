//! Registry of record identifiers seen during one validation run.

use std::collections::TryReserveError;

use fxhash::FxHashSet;
use thiserror::Error;

/// Errors raised by the identifier registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unable to allocate the identifier table: {0}")]
    Allocation(#[from] TryReserveError),
}

/// A write-once set of identifiers.
///
/// Each validation run owns its own registry; nothing is shared between
/// files.
#[derive(Debug, Default)]
pub struct IdRegistry {
    ids: FxHashSet<Box<[u8]>>,
}

impl IdRegistry {
    /// Creates a registry with room for `capacity` identifiers.
    pub fn with_capacity(capacity: usize) -> Result<Self, RegistryError> {
        let mut ids = FxHashSet::default();
        ids.try_reserve(capacity)?;
        Ok(Self { ids })
    }

    /// Inserts `id` unless it is already present.
    ///
    /// Returns `true` if the identifier already existed, in which case the
    /// registry is left untouched.
    pub fn insert_if_absent(&mut self, id: &[u8]) -> Result<bool, RegistryError> {
        if self.ids.contains(id) {
            return Ok(true);
        }
        self.ids.try_reserve(1)?;
        self.ids.insert(id.into());
        Ok(false)
    }

    /// Forgets every identifier, keeping the allocation for the next run.
    pub fn reset(&mut self) {
        self.ids.clear();
    }

    /// Number of distinct identifiers seen.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
