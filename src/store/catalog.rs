//! Leave type catalog.

use std::sync::atomic::{AtomicU32, Ordering};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, info};

use crate::models::{LeaveTypeEntry, LeaveTypeId, LeaveTypeKind};

/// The provisioned leave types, keyed by kind.
///
/// Holds at most one [`LeaveTypeEntry`] per [`LeaveTypeKind`]; the entry
/// API enforces the uniqueness invariant at creation time. Seeding is an
/// explicit [`LeaveTypeCatalog::bootstrap`] call made once at process
/// startup, never a constructor side effect, and re-running it does not
/// duplicate rows.
#[derive(Debug)]
pub struct LeaveTypeCatalog {
    entries: DashMap<LeaveTypeKind, LeaveTypeEntry>,
    next_id: AtomicU32,
}

impl LeaveTypeCatalog {
    /// Creates an empty, unseeded catalog.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            next_id: AtomicU32::new(1),
        }
    }

    /// Seeds a catalog row for every [`LeaveTypeKind`] that is missing one.
    ///
    /// Idempotent: kinds that already have a row are left untouched, so
    /// calling this repeatedly never duplicates rows or reassigns ids.
    pub fn bootstrap(&self) {
        info!("Initializing default leave types");
        for kind in LeaveTypeKind::ALL {
            match self.entries.entry(kind) {
                Entry::Occupied(_) => {
                    debug!(%kind, "Leave type already exists");
                }
                Entry::Vacant(vacant) => {
                    let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                    vacant.insert(LeaveTypeEntry { id, kind });
                    debug!(%kind, id, "Inserted leave type");
                }
            }
        }
        info!("Leave type initialization completed");
    }

    /// Returns the catalog entry for `kind`, or `None` if not provisioned.
    pub fn find_by_kind(&self, kind: LeaveTypeKind) -> Option<LeaveTypeEntry> {
        self.entries.get(&kind).map(|e| *e)
    }

    /// Returns the catalog entry with the given id, if any.
    pub fn find_by_id(&self, id: LeaveTypeId) -> Option<LeaveTypeEntry> {
        self.entries.iter().find(|e| e.id == id).map(|e| *e)
    }

    /// Returns all provisioned entries, in [`LeaveTypeKind::ALL`] order.
    pub fn entries(&self) -> Vec<LeaveTypeEntry> {
        LeaveTypeKind::ALL
            .into_iter()
            .filter_map(|kind| self.find_by_kind(kind))
            .collect()
    }
}
