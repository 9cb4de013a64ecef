//! Record store — cargo code to shipment record lookup.
//!
//! The [`CargoStore`] trait is the only seam the lookup service depends on, so
//! the literal in-process table can be swapped for persistent storage without
//! touching lookup or handlers.

pub mod sample;

use std::collections::HashMap;

use crate::models::cargo::CargoRecord;

pub use sample::sample_store;

/// Read-only access to cargo records by code.
pub trait CargoStore {
    /// Exact, case-sensitive lookup on the full code. Absence is not an error.
    fn get(&self, code: &str) -> Option<&CargoRecord>;

    /// All codes held by the store, sorted.
    fn codes(&self) -> Vec<&str>;
}

impl<T: CargoStore + ?Sized> CargoStore for &T {
    fn get(&self, code: &str) -> Option<&CargoRecord> {
        (**self).get(code)
    }

    fn codes(&self) -> Vec<&str> {
        (**self).codes()
    }
}

/// Immutable table of records keyed by their own cargo code.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCargoStore {
    records: HashMap<String, CargoRecord>,
}

impl InMemoryCargoStore {
    /// Build a store from records. Each record is keyed by its `cargo_code`;
    /// a later record with the same code replaces an earlier one.
    pub fn from_records(records: impl IntoIterator<Item = CargoRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.cargo_code.clone(), record))
            .collect();
        InMemoryCargoStore { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CargoStore for InMemoryCargoStore {
    fn get(&self, code: &str) -> Option<&CargoRecord> {
        self.records.get(code)
    }

    fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.records.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
