//! Leave Accounting and Approval Engine.
//!
//! This crate tracks employee leave entitlement and the lifecycle of
//! leave requests from submission through manager decision: it validates
//! applications against calendar and entitlement constraints, deducts
//! entitlement atomically on approval, and enforces a strict PENDING →
//! APPROVED/REJECTED state machine in which no request is ever processed
//! twice.
//!
//! Employee records and the authentication of manager decisions live
//! outside the crate; the engine consumes an employee directory as a
//! read-only collaborator and exposes its operations to a presentation
//! layer through [`engine::LeaveEngine`] and the [`api`] router.
//!
//! Call [`engine::LeaveEngine::bootstrap_catalog`] once at process
//! startup to seed the fixed leave types before serving requests.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod directory;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
