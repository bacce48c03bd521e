//! Employee directory collaborator.
//!
//! Employee records are owned outside the engine. The engine only needs
//! to check that an employee exists and to read their record; this module
//! defines that seam as a trait plus an in-memory implementation used in
//! tests and demos.

use dashmap::DashMap;

use crate::models::{EmployeeId, EmployeeRecord};

/// Read-only lookup of employee records.
///
/// Implementations are expected to be fast and local; the engine treats
/// directory lookups as cheap and performs no caching of its own.
pub trait EmployeeDirectory: Send + Sync {
    /// Returns the employee record for `id`, or `None` if unknown.
    fn get(&self, id: EmployeeId) -> Option<EmployeeRecord>;

    /// Returns true if an employee with `id` exists.
    fn exists(&self, id: EmployeeId) -> bool {
        self.get(id).is_some()
    }
}

/// An in-memory [`EmployeeDirectory`] backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    records: DashMap<EmployeeId, EmployeeRecord>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an employee record.
    pub fn insert(&self, record: EmployeeRecord) {
        self.records.insert(record.id, record);
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn get(&self, id: EmployeeId) -> Option<EmployeeRecord> {
        self.records.get(&id).map(|r| r.clone())
    }

    fn exists(&self, id: EmployeeId) -> bool {
        self.records.contains_key(&id)
    }
}
