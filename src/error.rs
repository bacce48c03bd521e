//! Error types for the Leave Accounting and Approval Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating, approving, or
//! rejecting leave requests.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{LeaveStatus, LeaveTypeKind};

/// The main error type for the Leave Accounting and Approval Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every
/// validation failure is detected before any mutation, so an error never
/// leaves the ledger or the request store partially updated.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee not found with id: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The employee id was not found in the employee directory.
    #[error("Employee not found with id: {id}")]
    EmployeeNotFound {
        /// The employee id that was looked up.
        id: u64,
    },

    /// The leave type name did not match any known leave type.
    #[error("Invalid leave type: {name}")]
    UnknownLeaveType {
        /// The name as received from the caller.
        name: String,
    },

    /// The leave type is known but has no row in the leave type catalog.
    #[error("Leave type not configured: {kind}")]
    LeaveTypeNotConfigured {
        /// The leave type kind that is missing from the catalog.
        kind: LeaveTypeKind,
    },

    /// No balance row exists for the (employee, leave type) pair.
    #[error("Leave balance not found for employee {employee_id} and leave type {leave_type_id}")]
    NoBalanceConfigured {
        /// The employee the balance was looked up for.
        employee_id: u64,
        /// The catalog id of the leave type.
        leave_type_id: u32,
    },

    /// The leave request id was not found in the request store.
    #[error("Leave request not found with id: {id}")]
    RequestNotFound {
        /// The request id that was looked up.
        id: Uuid,
    },

    /// The end date of the requested range precedes the start date.
    #[error("End date {end} cannot be before start date {start}")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// The requested range contains only Saturdays and Sundays.
    #[error("Selected dates {start} to {end} contain no working days")]
    NoWorkingDaysSelected {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// The remaining balance does not cover the requested days.
    #[error("Insufficient leave balance: available {available}, requested {requested}")]
    InsufficientBalance {
        /// Days remaining on the balance row.
        available: u32,
        /// Days the operation tried to deduct.
        requested: u32,
    },

    /// The request has already left the PENDING state.
    #[error("Leave request {id} already processed (status: {status})")]
    AlreadyProcessed {
        /// The request id.
        id: Uuid,
        /// The terminal status the request is already in.
        status: LeaveStatus,
    },

    /// A balance row already exists for the (employee, leave type) pair.
    #[error(
        "Entitlement already initialized for employee {employee_id} and leave type {leave_type_id}"
    )]
    DuplicateEntitlement {
        /// The employee the entitlement was being created for.
        employee_id: u64,
        /// The catalog id of the leave type.
        leave_type_id: u32,
    },

    /// The entitlement policy document could not be parsed.
    #[error("Failed to parse entitlement policy: {message}")]
    PolicyParseError {
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound { id: 7 };
        assert_eq!(error.to_string(), "Employee not found with id: 7");
    }

    #[test]
    fn test_unknown_leave_type_displays_name() {
        let error = EngineError::UnknownLeaveType {
            name: "SABBATICAL".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid leave type: SABBATICAL");
    }

    #[test]
    fn test_invalid_date_range_displays_both_dates() {
        let error = EngineError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "End date 2024-03-04 cannot be before start date 2024-03-08"
        );
    }

    #[test]
    fn test_insufficient_balance_displays_amounts() {
        let error = EngineError::InsufficientBalance {
            available: 1,
            requested: 5,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient leave balance: available 1, requested 5"
        );
    }

    #[test]
    fn test_already_processed_displays_status() {
        let id = Uuid::nil();
        let error = EngineError::AlreadyProcessed {
            id,
            status: LeaveStatus::Approved,
        };
        assert_eq!(
            error.to_string(),
            format!("Leave request {} already processed (status: APPROVED)", id)
        );
    }

    #[test]
    fn test_no_balance_configured_displays_pair() {
        let error = EngineError::NoBalanceConfigured {
            employee_id: 3,
            leave_type_id: 1,
        };
        assert_eq!(
            error.to_string(),
            "Leave balance not found for employee 3 and leave type 1"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_request_not_found() -> EngineResult<()> {
            Err(EngineError::RequestNotFound { id: Uuid::nil() })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_request_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
