//! Leave request store.

use std::sync::RwLock;

use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeId, LeaveRequest, LeaveStatus, Page};

/// Persisted leave request records, keyed by id.
///
/// The store exclusively owns request records; presentation code never
/// mutates them directly. List results are returned in insertion order,
/// which keeps repeated identical queries stable.
#[derive(Debug, Default)]
pub struct LeaveRequestStore {
    requests: DashMap<Uuid, LeaveRequest>,
    // Append-only insertion log; gives list queries a stable order.
    order: RwLock<Vec<Uuid>>,
}

impl LeaveRequestStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Persists a new request record and returns its id.
    pub fn create(&self, request: LeaveRequest) -> Uuid {
        let id = request.id;
        self.requests.insert(id, request);
        self.order
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(id);
        debug!(%id, "Leave request persisted");
        id
    }

    /// Returns the request with the given id, if any.
    pub fn get(&self, id: Uuid) -> Option<LeaveRequest> {
        self.requests.get(&id).map(|r| r.clone())
    }

    /// Overwrites the full record for an existing request.
    ///
    /// Fails with [`EngineError::RequestNotFound`] if no record exists
    /// with the request's id.
    pub fn update(&self, request: LeaveRequest) -> EngineResult<LeaveRequest> {
        let mut row = self
            .requests
            .get_mut(&request.id)
            .ok_or(EngineError::RequestNotFound { id: request.id })?;
        *row = request.clone();
        Ok(request)
    }

    /// Runs a status transition under the request's row lock.
    ///
    /// Loads the request and hands it to `decide`; if `decide` returns a
    /// new status the record is updated before the lock is released, and
    /// the updated record is returned. If `decide` fails, its error is
    /// propagated and the record is left untouched. A concurrent caller
    /// for the same id blocks until the lock is released and then sees
    /// the committed status.
    ///
    /// `decide` runs while the row lock is held, so it must not touch
    /// this store again; the approval workflow uses it to fold the
    /// ledger debit into the same critical section as the status update.
    pub fn transition<F>(&self, id: Uuid, decide: F) -> EngineResult<LeaveRequest>
    where
        F: FnOnce(&LeaveRequest) -> EngineResult<LeaveStatus>,
    {
        let mut row = self
            .requests
            .get_mut(&id)
            .ok_or(EngineError::RequestNotFound { id })?;
        let status = decide(&row)?;
        row.status = status;
        Ok(row.clone())
    }

    /// Returns one page of the employee's requests, in insertion order.
    pub fn list_by_employee(
        &self,
        employee_id: EmployeeId,
        page: usize,
        size: usize,
    ) -> Page<LeaveRequest> {
        self.list_filtered(page, size, |request| request.employee_id == employee_id)
    }

    /// Returns one page of requests in the given status, in insertion order.
    pub fn list_by_status(&self, status: LeaveStatus, page: usize, size: usize) -> Page<LeaveRequest> {
        self.list_filtered(page, size, |request| request.status == status)
    }

    fn list_filtered<F>(&self, page: usize, size: usize, keep: F) -> Page<LeaveRequest>
    where
        F: Fn(&LeaveRequest) -> bool,
    {
        let order = self
            .order
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let matching: Vec<LeaveRequest> = order
            .iter()
            .filter_map(|id| self.requests.get(id))
            .map(|r| r.clone())
            .filter(|r| keep(r))
            .collect();
        Page::from_slice(&matching, page, size)
    }
}
