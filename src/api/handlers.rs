//! HTTP request handlers for the leave engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::{ApplyLeaveRequest, CreateEntitlementsRequest, HistoryParams, PageParams};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/leave/apply", post(apply_handler))
        .route("/leave/history", get(history_handler))
        .route("/manager/pending", get(pending_handler))
        .route("/manager/approve/:id", patch(approve_handler))
        .route("/manager/reject/:id", patch(reject_handler))
        .route("/entitlements", post(entitlements_handler))
        .with_state(state)
}

/// Turns a JSON extraction failure into a 400 response body.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /leave/apply.
///
/// Validates the application and creates a PENDING request.
async fn apply_handler(
    State(state): State<AppState>,
    payload: Result<Json<ApplyLeaveRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = request.employee_id,
        leave_type = %request.leave_type,
        "Leave apply request received"
    );

    match state.engine().apply_leave(
        request.employee_id,
        &request.leave_type,
        request.start_date,
        request.end_date,
        &request.reason,
    ) {
        Ok(created) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %created.id,
                total_days = created.total_days,
                "Leave applied successfully"
            );
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Leave application failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /leave/history.
///
/// Returns one page of the employee's leave requests.
async fn history_handler(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = params.employee_id,
        page = params.page,
        size = params.size,
        "Fetching leave history"
    );

    match state
        .engine()
        .leave_history(params.employee_id, params.page, params.size)
    {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "History fetch failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /manager/pending.
///
/// Returns one page of requests awaiting a decision.
async fn pending_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        page = params.page,
        size = params.size,
        "Manager requested pending leave list"
    );

    let page = state.engine().pending_requests(params.page, params.size);
    info!(
        correlation_id = %correlation_id,
        total_elements = page.total_elements,
        total_pages = page.total_pages,
        "Pending leave page fetched"
    );
    (StatusCode::OK, Json(page))
}

/// Handler for PATCH /manager/approve/:id.
async fn approve_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, request_id = %id, "Approve requested");

    match state.engine().approve(id) {
        Ok(approved) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %id,
                status = %approved.status,
                "Leave request approved"
            );
            (StatusCode::OK, Json(approved)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Approval failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PATCH /manager/reject/:id.
async fn reject_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, request_id = %id, "Reject requested");

    match state.engine().reject(id) {
        Ok(rejected) => {
            info!(
                correlation_id = %correlation_id,
                request_id = %id,
                status = %rejected.status,
                "Leave request rejected"
            );
            (StatusCode::OK, Json(rejected)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejection failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /entitlements.
///
/// Seeds the employee's ledger rows from the department policy.
async fn entitlements_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEntitlementsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = request.employee_id,
        department = %request.department,
        "Creating employee entitlements"
    );

    match state
        .engine()
        .create_employee_entitlements(request.employee_id, request.department)
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Entitlement creation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
