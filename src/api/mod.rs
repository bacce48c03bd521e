//! HTTP API for the Leave Accounting and Approval Engine.
//!
//! This module provides the axum-based presentation layer: the router,
//! shared application state, and the request/response DTOs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ApplyLeaveRequest, CreateEntitlementsRequest, HistoryParams, PageParams};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
