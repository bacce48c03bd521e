//! Request types for the leave engine API.
//!
//! This module defines the JSON body and query parameter structures the
//! handlers accept.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Department, EmployeeId};

fn default_page_size() -> usize {
    5
}

/// Body for `POST /leave/apply`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyLeaveRequest {
    /// The employee applying for leave.
    pub employee_id: EmployeeId,
    /// The leave type name; matched case-insensitively against the
    /// fixed set (SICK, CASUAL, EARNED).
    pub leave_type: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Free-form reason for the leave.
    pub reason: String,
}

/// Body for `POST /entitlements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntitlementsRequest {
    /// The employee being onboarded.
    pub employee_id: EmployeeId,
    /// The department whose policy determines the initial days.
    pub department: Department,
}

/// Query parameters for `GET /leave/history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryParams {
    /// The employee whose history to fetch.
    pub employee_id: EmployeeId,
    /// Zero-based page index; defaults to 0.
    #[serde(default)]
    pub page: usize,
    /// Page size; defaults to 5.
    #[serde(default = "default_page_size")]
    pub size: usize,
}

/// Query parameters for `GET /manager/pending`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageParams {
    /// Zero-based page index; defaults to 0.
    #[serde(default)]
    pub page: usize,
    /// Page size; defaults to 5.
    #[serde(default = "default_page_size")]
    pub size: usize,
}
