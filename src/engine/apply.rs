//! Leave application validation.

use chrono::NaiveDate;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::LeaveEngine;
use crate::calendar::count_working_days;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeId, LeaveRequest, LeaveStatus, LeaveTypeKind};

impl LeaveEngine {
    /// Validates a leave application and persists it as a PENDING request.
    ///
    /// Checks run fail-fast, first failure wins:
    ///
    /// 1. the date range must not be inverted,
    /// 2. the employee must exist in the directory,
    /// 3. `leave_type_name` must name a known leave type
    ///    (case-insensitive),
    /// 4. that leave type must be provisioned in the catalog,
    /// 5. a balance row must exist for the (employee, leave type) pair,
    /// 6. the range must contain at least one working day,
    /// 7. the remaining balance must cover the working-day count.
    ///
    /// On success the request is stored with the computed `total_days`
    /// and status PENDING. The balance is only checked here, never
    /// reserved; the approval workflow's debit is the sole authoritative
    /// reservation point, so a request that passes validation can still
    /// fail at approval time if the balance has been consumed since.
    pub fn apply_leave(
        &self,
        employee_id: EmployeeId,
        leave_type_name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: &str,
    ) -> EngineResult<LeaveRequest> {
        info!(employee_id, leave_type_name, "Applying leave");

        if end_date < start_date {
            warn!(%start_date, %end_date, "Invalid date range");
            return Err(EngineError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        if !self.directory().exists(employee_id) {
            error!(employee_id, "Employee not found");
            return Err(EngineError::EmployeeNotFound { id: employee_id });
        }

        let kind: LeaveTypeKind = leave_type_name.parse().map_err(|_| {
            warn!(leave_type_name, "Invalid leave type received");
            EngineError::UnknownLeaveType {
                name: leave_type_name.to_string(),
            }
        })?;

        let entry = self.catalog().find_by_kind(kind).ok_or_else(|| {
            error!(%kind, "Leave type not configured");
            EngineError::LeaveTypeNotConfigured { kind }
        })?;

        let balance = self.ledger().get(employee_id, entry.id).ok_or_else(|| {
            error!(employee_id, leave_type_id = entry.id, "Leave balance not found");
            EngineError::NoBalanceConfigured {
                employee_id,
                leave_type_id: entry.id,
            }
        })?;

        let total_days = count_working_days(start_date, end_date);
        debug!(total_days, "Calculated working days");

        if total_days == 0 {
            warn!(%start_date, %end_date, "Selected dates contain no working days");
            return Err(EngineError::NoWorkingDaysSelected {
                start: start_date,
                end: end_date,
            });
        }

        if balance.remaining_days < total_days {
            warn!(
                available = balance.remaining_days,
                requested = total_days,
                "Insufficient leave balance"
            );
            return Err(EngineError::InsufficientBalance {
                available: balance.remaining_days,
                requested: total_days,
            });
        }

        let request = LeaveRequest {
            id: Uuid::new_v4(),
            employee_id,
            leave_type_id: entry.id,
            start_date,
            end_date,
            total_days,
            status: LeaveStatus::Pending,
            reason: reason.to_string(),
        };
        let id = self.requests().create(request.clone());

        info!(%id, "Leave request created");
        Ok(request)
    }
}
