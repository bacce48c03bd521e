//! The Leave Accounting and Approval Engine.
//!
//! This module wires the engine facade together and hosts its
//! operations: leave application validation, the approval workflow,
//! and entitlement initialization.

mod apply;
mod approval;
mod entitlement;

pub use entitlement::EntitlementPolicy;

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::directory::EmployeeDirectory;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeId, LeaveRequest, LeaveStatus, Page};
use crate::store::{BalanceLedger, LeaveRequestStore, LeaveTypeCatalog};

/// The engine facade the presentation layer talks to.
///
/// Owns the leave type catalog, the balance ledger, and the request
/// store, and consumes the employee directory as a read-only external
/// collaborator. All operations are synchronous and safe to call from
/// any number of concurrently scheduled workers.
///
/// The catalog starts empty: call [`LeaveEngine::bootstrap_catalog`]
/// once during process startup to seed the fixed leave types.
pub struct LeaveEngine {
    directory: Arc<dyn EmployeeDirectory>,
    catalog: LeaveTypeCatalog,
    ledger: BalanceLedger,
    requests: LeaveRequestStore,
    policy: EntitlementPolicy,
}

impl LeaveEngine {
    /// Creates an engine with the default entitlement policy.
    pub fn new(directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self::with_policy(directory, EntitlementPolicy::default())
    }

    /// Creates an engine with a custom entitlement policy.
    pub fn with_policy(directory: Arc<dyn EmployeeDirectory>, policy: EntitlementPolicy) -> Self {
        Self {
            directory,
            catalog: LeaveTypeCatalog::new(),
            ledger: BalanceLedger::new(),
            requests: LeaveRequestStore::new(),
            policy,
        }
    }

    /// Seeds the leave type catalog with the fixed set of leave types.
    ///
    /// Idempotent; intended to be called once at process startup.
    pub fn bootstrap_catalog(&self) {
        self.catalog.bootstrap();
    }

    /// The leave type catalog.
    pub fn catalog(&self) -> &LeaveTypeCatalog {
        &self.catalog
    }

    /// The balance ledger.
    pub fn ledger(&self) -> &BalanceLedger {
        &self.ledger
    }

    /// The request store.
    pub fn requests(&self) -> &LeaveRequestStore {
        &self.requests
    }

    pub(crate) fn directory(&self) -> &dyn EmployeeDirectory {
        self.directory.as_ref()
    }

    pub(crate) fn policy(&self) -> &EntitlementPolicy {
        &self.policy
    }

    /// Returns one page of an employee's leave history.
    ///
    /// Fails with [`EngineError::EmployeeNotFound`] if the employee does
    /// not exist in the directory.
    pub fn leave_history(
        &self,
        employee_id: EmployeeId,
        page: usize,
        size: usize,
    ) -> EngineResult<Page<LeaveRequest>> {
        info!(employee_id, page, size, "Fetching leave history");

        if !self.directory.exists(employee_id) {
            error!(employee_id, "Employee not found while fetching history");
            return Err(EngineError::EmployeeNotFound { id: employee_id });
        }

        let result = self.requests.list_by_employee(employee_id, page, size);
        debug!(fetched = result.items.len(), "Fetched leave records");
        Ok(result)
    }

    /// Returns one page of requests still awaiting a decision.
    pub fn pending_requests(&self, page: usize, size: usize) -> Page<LeaveRequest> {
        info!(page, size, "Fetching pending leave requests");
        let result = self.requests.list_by_status(LeaveStatus::Pending, page, size);
        debug!(fetched = result.items.len(), "Fetched pending requests");
        result
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::directory::InMemoryDirectory;
    use crate::models::{Department, EmployeeRecord};

    /// Builds an engine with a seeded catalog and one active employee
    /// per department, ids 1..=4 in [`Department`] declaration order.
    pub fn engine_with_employees() -> LeaveEngine {
        let directory = Arc::new(InMemoryDirectory::new());
        for (id, department) in [
            (1, Department::Consulting),
            (2, Department::Support),
            (3, Department::Development),
            (4, Department::Trainee),
        ] {
            directory.insert(EmployeeRecord {
                id,
                name: format!("Employee {id}"),
                email: format!("employee{id}@example.com"),
                department,
                active: true,
            });
        }
        let engine = LeaveEngine::new(directory);
        engine.bootstrap_catalog();
        engine
    }
}
