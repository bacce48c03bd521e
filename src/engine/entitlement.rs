//! Entitlement policy and initializer.
//!
//! When an employee is onboarded, the initializer seeds one ledger row
//! per provisioned leave type with the day count the department policy
//! assigns. A computed count of zero means "not entitled" and no row is
//! created, consistent with the ledger treating absence as unconfigured
//! rather than zero.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::LeaveEngine;
use crate::error::{EngineError, EngineResult};
use crate::models::{Department, EmployeeId, LeaveTypeKind};

/// Initial leave days per leave type for one department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentEntitlements {
    /// Initial sick leave days.
    pub sick: u32,
    /// Initial casual leave days.
    pub casual: u32,
    /// Initial earned leave days.
    pub earned: u32,
}

impl DepartmentEntitlements {
    fn days_for(&self, kind: LeaveTypeKind) -> u32 {
        match kind {
            LeaveTypeKind::Sick => self.sick,
            LeaveTypeKind::Casual => self.casual,
            LeaveTypeKind::Earned => self.earned,
        }
    }
}

/// The department-to-entitlement lookup table.
///
/// A pure lookup table, deserializable so deployments can override the
/// built-in defaults from a YAML document. Departments missing from the
/// table get zero days for every leave type.
///
/// # Example
///
/// ```
/// use leave_engine::engine::EntitlementPolicy;
/// use leave_engine::models::{Department, LeaveTypeKind};
///
/// let policy = EntitlementPolicy::default();
/// assert_eq!(policy.initial_days(Department::Development, LeaveTypeKind::Sick), 6);
/// assert_eq!(policy.initial_days(Department::Trainee, LeaveTypeKind::Earned), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementPolicy {
    departments: HashMap<Department, DepartmentEntitlements>,
}

impl Default for EntitlementPolicy {
    fn default() -> Self {
        let standard = DepartmentEntitlements {
            sick: 6,
            casual: 6,
            earned: 3,
        };
        let trainee = DepartmentEntitlements {
            sick: 6,
            casual: 6,
            earned: 0,
        };
        let departments = HashMap::from([
            (Department::Consulting, standard),
            (Department::Support, standard),
            (Department::Development, standard),
            (Department::Trainee, trainee),
        ]);
        Self { departments }
    }
}

impl EntitlementPolicy {
    /// Parses a policy table from a YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::engine::EntitlementPolicy;
    /// use leave_engine::models::{Department, LeaveTypeKind};
    ///
    /// let yaml = "
    /// departments:
    ///   TRAINEE: { sick: 4, casual: 2, earned: 0 }
    /// ";
    /// let policy = EntitlementPolicy::from_yaml_str(yaml).unwrap();
    /// assert_eq!(policy.initial_days(Department::Trainee, LeaveTypeKind::Sick), 4);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> EngineResult<Self> {
        serde_yaml::from_str(yaml).map_err(|err| EngineError::PolicyParseError {
            message: err.to_string(),
        })
    }

    /// Returns the initial day count for a department and leave type.
    ///
    /// Unconfigured departments get 0 days for every leave type.
    pub fn initial_days(&self, department: Department, kind: LeaveTypeKind) -> u32 {
        match self.departments.get(&department) {
            Some(entitlements) => entitlements.days_for(kind),
            None => {
                warn!(%department, %kind, "No leave configuration for department");
                0
            }
        }
    }
}

impl LeaveEngine {
    /// Seeds the employee's ledger rows from the department policy.
    ///
    /// Runs once per employee at onboarding. For each provisioned leave
    /// type, computes the initial day count; a count of zero skips the
    /// row entirely, otherwise a ledger row is initialized. Fails with
    /// [`EngineError::DuplicateEntitlement`] if a row for the employee
    /// and a leave type already exists.
    pub fn create_employee_entitlements(
        &self,
        employee_id: EmployeeId,
        department: Department,
    ) -> EngineResult<()> {
        info!(employee_id, %department, "Initializing leave balances");

        for entry in self.catalog().entries() {
            let days = self.policy().initial_days(department, entry.kind);
            if days == 0 {
                debug!(%department, kind = %entry.kind, "No initial leave assigned");
                continue;
            }
            self.ledger().initialize(employee_id, entry.id, days)?;
            debug!(
                employee_id,
                kind = %entry.kind,
                days,
                "Assigned initial leave days"
            );
        }
        Ok(())
    }
}
