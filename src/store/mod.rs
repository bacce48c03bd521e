//! Shared state owned by the engine.
//!
//! The leave type catalog, the balance ledger, and the leave request
//! store are the three mutable resources the engine guards. Each is
//! backed by a concurrent map; the ledger and the request store expose
//! per-row critical sections that the validator and the approval
//! workflow build their atomicity guarantees on.

mod catalog;
mod ledger;
mod requests;

pub use catalog::LeaveTypeCatalog;
pub use ledger::BalanceLedger;
pub use requests::LeaveRequestStore;
