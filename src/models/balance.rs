//! Leave balance rows.

use serde::{Deserialize, Serialize};

use super::{EmployeeId, LeaveTypeId};

/// Remaining leave entitlement for one (employee, leave type) pair.
///
/// Exactly one row exists per initialized pair; absence of a row means
/// "no entitlement configured", not zero. `remaining_days` is unsigned,
/// so a negative balance is unrepresentable; the ledger's debit refuses
/// any deduction that the balance does not cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Unique identifier for the balance row.
    pub id: u64,
    /// The employee this balance belongs to.
    pub employee_id: EmployeeId,
    /// The catalog id of the leave type this balance covers.
    pub leave_type_id: LeaveTypeId,
    /// Days of entitlement remaining.
    pub remaining_days: u32,
}
