//! Leave balance ledger.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeId, LeaveBalance, LeaveTypeId};

/// Remaining-entitlement counter per (employee, leave type) pair.
///
/// The ledger is the only place balance rows are mutated. Debits are the
/// single point in the engine that needs cross-request mutual exclusion:
/// the check-then-decrement runs under the row's map entry lock, so
/// concurrent debits against the same pair serialize and a debit that
/// would drive the balance negative fails without touching the row.
#[derive(Debug)]
pub struct BalanceLedger {
    rows: DashMap<(EmployeeId, LeaveTypeId), LeaveBalance>,
    next_id: AtomicU64,
}

impl BalanceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Returns the balance row for the pair, or `None` if no entitlement
    /// has been configured. Absence is not the same as a zero balance.
    pub fn get(&self, employee_id: EmployeeId, leave_type_id: LeaveTypeId) -> Option<LeaveBalance> {
        self.rows.get(&(employee_id, leave_type_id)).map(|b| b.clone())
    }

    /// Creates the balance row for the pair with `days` of entitlement.
    ///
    /// Fails with [`EngineError::DuplicateEntitlement`] if a row already
    /// exists; the check and the insert happen under the entry lock, so
    /// two concurrent initializations cannot both succeed.
    pub fn initialize(
        &self,
        employee_id: EmployeeId,
        leave_type_id: LeaveTypeId,
        days: u32,
    ) -> EngineResult<LeaveBalance> {
        match self.rows.entry((employee_id, leave_type_id)) {
            Entry::Occupied(_) => {
                warn!(employee_id, leave_type_id, "Entitlement already initialized");
                Err(EngineError::DuplicateEntitlement {
                    employee_id,
                    leave_type_id,
                })
            }
            Entry::Vacant(vacant) => {
                let balance = LeaveBalance {
                    id: self.next_id.fetch_add(1, Ordering::Relaxed),
                    employee_id,
                    leave_type_id,
                    remaining_days: days,
                };
                debug!(employee_id, leave_type_id, days, "Initialized leave balance");
                vacant.insert(balance.clone());
                Ok(balance)
            }
        }
    }

    /// Atomically deducts `days` from the pair's balance.
    ///
    /// The remaining-days check and the decrement run under the row's
    /// entry lock, so only one of several racing debits observes the
    /// pre-debit value. Fails with [`EngineError::InsufficientBalance`]
    /// when the balance does not cover the deduction, and with
    /// [`EngineError::NoBalanceConfigured`] when no row exists; in both
    /// cases the ledger is left unchanged.
    pub fn debit(
        &self,
        employee_id: EmployeeId,
        leave_type_id: LeaveTypeId,
        days: u32,
    ) -> EngineResult<LeaveBalance> {
        let mut row = self.rows.get_mut(&(employee_id, leave_type_id)).ok_or(
            EngineError::NoBalanceConfigured {
                employee_id,
                leave_type_id,
            },
        )?;

        if row.remaining_days < days {
            warn!(
                employee_id,
                leave_type_id,
                available = row.remaining_days,
                requested = days,
                "Insufficient leave balance"
            );
            return Err(EngineError::InsufficientBalance {
                available: row.remaining_days,
                requested: days,
            });
        }

        row.remaining_days -= days;
        debug!(
            employee_id,
            leave_type_id,
            remaining = row.remaining_days,
            "Leave balance updated"
        );
        Ok(row.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_get_unconfigured_pair_returns_none() {
        let ledger = BalanceLedger::new();
        assert!(ledger.get(1, 1).is_none());
    }

    #[test]
    fn test_initialize_creates_row() {
        let ledger = BalanceLedger::new();
        ledger.initialize(1, 2, 6).unwrap();

        let balance = ledger.get(1, 2).unwrap();
        assert_eq!(balance.remaining_days, 6);
        assert_eq!(balance.employee_id, 1);
        assert_eq!(balance.leave_type_id, 2);
    }

    #[test]
    fn test_initialize_duplicate_pair_fails() {
        let ledger = BalanceLedger::new();
        ledger.initialize(1, 2, 6).unwrap();

        let err = ledger.initialize(1, 2, 3).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateEntitlement { .. }));
        // The original row is untouched
        assert_eq!(ledger.get(1, 2).unwrap().remaining_days, 6);
    }

    #[test]
    fn test_debit_decrements_balance() {
        let ledger = BalanceLedger::new();
        ledger.initialize(1, 1, 6).unwrap();

        let updated = ledger.debit(1, 1, 5).unwrap();
        assert_eq!(updated.remaining_days, 1);
        assert_eq!(ledger.get(1, 1).unwrap().remaining_days, 1);
    }

    #[test]
    fn test_debit_to_exactly_zero_succeeds() {
        let ledger = BalanceLedger::new();
        ledger.initialize(1, 1, 5).unwrap();

        let updated = ledger.debit(1, 1, 5).unwrap();
        assert_eq!(updated.remaining_days, 0);
    }

    #[test]
    fn test_debit_beyond_balance_fails_without_mutation() {
        let ledger = BalanceLedger::new();
        ledger.initialize(1, 1, 3).unwrap();

        let err = ledger.debit(1, 1, 4).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InsufficientBalance {
                available: 3,
                requested: 4,
            }
        ));
        assert_eq!(ledger.get(1, 1).unwrap().remaining_days, 3);
    }

    #[test]
    fn test_debit_unconfigured_pair_fails() {
        let ledger = BalanceLedger::new();
        let err = ledger.debit(9, 9, 1).unwrap_err();
        assert!(matches!(err, EngineError::NoBalanceConfigured { .. }));
    }

    #[test]
    fn test_concurrent_debits_never_lose_updates() {
        let ledger = Arc::new(BalanceLedger::new());
        ledger.initialize(1, 1, 10).unwrap();

        // 20 threads each try to debit 1 day; exactly 10 can succeed.
        let handles: Vec<_> = (0..20)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || ledger.debit(1, 1, 1).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 10);
        assert_eq!(ledger.get(1, 1).unwrap().remaining_days, 0);
    }

    #[test]
    fn test_debits_on_different_pairs_are_independent() {
        let ledger = BalanceLedger::new();
        ledger.initialize(1, 1, 5).unwrap();
        ledger.initialize(1, 2, 5).unwrap();

        ledger.debit(1, 1, 5).unwrap();
        assert_eq!(ledger.get(1, 2).unwrap().remaining_days, 5);
    }
}
