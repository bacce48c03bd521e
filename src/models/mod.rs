//! Domain models for the Leave Accounting and Approval Engine.
//!
//! This module contains the core data types: employees and departments,
//! leave types, leave balances, leave requests, and pagination.

mod balance;
mod employee;
mod leave_request;
mod leave_type;
mod page;

pub use balance::LeaveBalance;
pub use employee::{Department, EmployeeRecord};
pub use leave_request::{LeaveRequest, LeaveStatus};
pub use leave_type::{LeaveTypeEntry, LeaveTypeKind, ParseLeaveTypeError};
pub use page::Page;

/// Identifier for an employee, assigned by the external employee directory.
pub type EmployeeId = u64;

/// Identifier for a leave type catalog entry.
pub type LeaveTypeId = u32;
