//! Leave request records and their lifecycle states.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmployeeId, LeaveTypeId};

/// The lifecycle state of a leave request.
///
/// A request is created as [`LeaveStatus::Pending`] and transitions at
/// most once, to either [`LeaveStatus::Approved`] or
/// [`LeaveStatus::Rejected`]. Both of those states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    /// Awaiting a manager decision; the only non-terminal state.
    Pending,
    /// Approved; the balance has been debited.
    Approved,
    /// Rejected; no balance effect.
    Rejected,
}

impl LeaveStatus {
    /// Returns true if no further transition is allowed from this state.
    pub fn is_terminal(self) -> bool {
        self != LeaveStatus::Pending
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "PENDING"),
            LeaveStatus::Approved => write!(f, "APPROVED"),
            LeaveStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// A leave request as held by the request store.
///
/// `total_days` is the working-day count computed when the request was
/// created and is never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: Uuid,
    /// The employee the leave is for.
    pub employee_id: EmployeeId,
    /// The catalog id of the requested leave type.
    pub leave_type_id: LeaveTypeId,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Working days covered by the request; fixed at creation.
    pub total_days: u32,
    /// Current lifecycle state.
    pub status: LeaveStatus,
    /// Free-form reason supplied by the employee.
    pub reason: String,
}
