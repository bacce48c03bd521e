//! Approval workflow.
//!
//! A leave request transitions out of PENDING at most once, to either
//! APPROVED (with the balance debit) or REJECTED. Both transitions run
//! under the request's row lock in the store, so a second concurrent
//! decision for the same request observes the terminal status and fails
//! with `AlreadyProcessed` instead of silently succeeding.

use tracing::{info, warn};
use uuid::Uuid;

use super::LeaveEngine;
use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveRequest, LeaveStatus};

impl LeaveEngine {
    /// Approves a PENDING request and debits the balance.
    ///
    /// The PENDING check, the balance re-check, and the debit all run
    /// inside the request's row critical section; the APPROVED status is
    /// committed only after the debit succeeds, so the two writes are
    /// observed together or not at all. The balance is re-checked here
    /// because application time only checks, never reserves: this debit
    /// is the sole authoritative reservation point.
    ///
    /// # Errors
    ///
    /// - [`EngineError::RequestNotFound`] if the id is unknown
    /// - [`EngineError::AlreadyProcessed`] if the request already left
    ///   PENDING
    /// - [`EngineError::NoBalanceConfigured`] if the balance row has
    ///   gone missing
    /// - [`EngineError::InsufficientBalance`] if the balance no longer
    ///   covers `total_days`; the request stays PENDING
    pub fn approve(&self, request_id: Uuid) -> EngineResult<LeaveRequest> {
        info!(%request_id, "Attempting to approve leave request");

        let approved = self.requests().transition(request_id, |request| {
            if request.status != LeaveStatus::Pending {
                warn!(status = %request.status, "Leave request already processed");
                return Err(EngineError::AlreadyProcessed {
                    id: request.id,
                    status: request.status,
                });
            }

            // Atomic check-then-decrement; on failure the status below
            // is never committed.
            self.ledger()
                .debit(request.employee_id, request.leave_type_id, request.total_days)?;

            Ok(LeaveStatus::Approved)
        })?;

        info!(%request_id, "Leave request approved");
        Ok(approved)
    }

    /// Rejects a PENDING request. No balance effect.
    ///
    /// Nothing was deducted at application time, so rejection has
    /// nothing to restore.
    ///
    /// # Errors
    ///
    /// - [`EngineError::RequestNotFound`] if the id is unknown
    /// - [`EngineError::AlreadyProcessed`] if the request already left
    ///   PENDING
    pub fn reject(&self, request_id: Uuid) -> EngineResult<LeaveRequest> {
        info!(%request_id, "Attempting to reject leave request");

        let rejected = self.requests().transition(request_id, |request| {
            if request.status != LeaveStatus::Pending {
                warn!(status = %request.status, "Leave request already processed");
                return Err(EngineError::AlreadyProcessed {
                    id: request.id,
                    status: request.status,
                });
            }
            Ok(LeaveStatus::Rejected)
        })?;

        info!(%request_id, "Leave request rejected");
        Ok(rejected)
    }
}
