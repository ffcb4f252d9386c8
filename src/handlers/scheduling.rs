use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::scheduling_draft::DraftStatus;
use crate::services::scheduling::{
    ApproveDraftRequest, BackfillReport, DraftResponse, RejectDraftRequest, SchedulingStats,
};
use crate::{
    errors::ServiceError, ApiResponse, ApiResult, AppState, PaginatedResponse,
};

/// Reviewer-facing routes for the scheduling engine.
pub fn scheduling_routes() -> Router<AppState> {
    Router::new()
        .route("/drafts", get(list_drafts))
        .route("/drafts/:id", get(get_draft))
        .route("/drafts/:id/approve", post(approve_draft))
        .route("/drafts/:id/reject", post(reject_draft))
        .route("/orders/:order_id/schedule", post(schedule_order))
        .route("/backfill", post(run_backfill))
        .route("/stats", get(get_stats))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DraftListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub status: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    20
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ScheduleOrderRequest {
    pub created_by: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct BackfillRequest {
    pub created_by: Option<String>,
}

fn parse_status(raw: &str) -> Result<DraftStatus, ServiceError> {
    DraftStatus::from_str(raw).map_err(|_| {
        ServiceError::InvalidStatus(format!("Unknown draft status: {}", raw))
    })
}

/// List scheduling drafts, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/scheduling/drafts",
    summary = "List scheduling drafts",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20)"),
        ("status" = Option<String>, Query, description = "Filter by draft status"),
    ),
    responses(
        (status = 200, description = "Drafts retrieved", body = ApiResponse<PaginatedResponse<DraftResponse>>),
        (status = 400, description = "Invalid status filter", body = crate::errors::ErrorResponse),
    ),
    tag = "scheduling"
)]
pub async fn list_drafts(
    State(state): State<AppState>,
    Query(query): Query<DraftListQuery>,
) -> ApiResult<PaginatedResponse<DraftResponse>> {
    let status = query.status.as_deref().map(parse_status).transpose()?;
    let (drafts, total) = state
        .services
        .scheduling
        .list_drafts(status, query.page, query.limit)
        .await?;

    let limit = query.limit.clamp(1, 100);
    Ok(Json(ApiResponse::success(PaginatedResponse {
        items: drafts,
        total,
        page: query.page.max(1),
        limit,
        total_pages: total.div_ceil(limit),
    })))
}

/// Fetch one draft with full reasoning and alternatives.
#[utoipa::path(
    get,
    path = "/api/v1/scheduling/drafts/{id}",
    summary = "Get scheduling draft",
    params(("id" = Uuid, Path, description = "Draft ID")),
    responses(
        (status = 200, description = "Draft retrieved", body = ApiResponse<DraftResponse>),
        (status = 404, description = "Draft not found", body = crate::errors::ErrorResponse),
    ),
    tag = "scheduling"
)]
pub async fn get_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<DraftResponse> {
    let draft = state.services.scheduling.get_draft(id).await?;
    Ok(Json(ApiResponse::success(draft)))
}

/// Approve a pending draft, optionally with reviewer overrides.
#[utoipa::path(
    post,
    path = "/api/v1/scheduling/drafts/{id}/approve",
    summary = "Approve scheduling draft",
    params(("id" = Uuid, Path, description = "Draft ID")),
    request_body = ApproveDraftRequest,
    responses(
        (status = 200, description = "Draft approved", body = ApiResponse<DraftResponse>),
        (status = 400, description = "Invalid modifications payload", body = crate::errors::ErrorResponse),
        (status = 404, description = "Draft not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Draft already decided", body = crate::errors::ErrorResponse),
    ),
    tag = "scheduling"
)]
pub async fn approve_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ApproveDraftRequest>,
) -> ApiResult<DraftResponse> {
    let draft = state.services.scheduling.approve_draft(id, request).await?;
    Ok(Json(ApiResponse::success(draft)))
}

/// Reject a pending draft; the reason is mandatory.
#[utoipa::path(
    post,
    path = "/api/v1/scheduling/drafts/{id}/reject",
    summary = "Reject scheduling draft",
    params(("id" = Uuid, Path, description = "Draft ID")),
    request_body = RejectDraftRequest,
    responses(
        (status = 200, description = "Draft rejected", body = ApiResponse<DraftResponse>),
        (status = 400, description = "Missing rejection reason", body = crate::errors::ErrorResponse),
        (status = 404, description = "Draft not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Draft already decided", body = crate::errors::ErrorResponse),
    ),
    tag = "scheduling"
)]
pub async fn reject_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RejectDraftRequest>,
) -> ApiResult<DraftResponse> {
    let draft = state.services.scheduling.reject_draft(id, request).await?;
    Ok(Json(ApiResponse::success(draft)))
}

/// Trigger scheduling for one order.
#[utoipa::path(
    post,
    path = "/api/v1/scheduling/orders/{order_id}/schedule",
    summary = "Schedule one order",
    params(("order_id" = Uuid, Path, description = "Order ID")),
    request_body = ScheduleOrderRequest,
    responses(
        (status = 200, description = "Draft created", body = ApiResponse<DraftResponse>),
        (status = 404, description = "Order or store not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Order already scheduled or has a pending draft", body = crate::errors::ErrorResponse),
        (status = 422, description = "No eligible distributor", body = crate::errors::ErrorResponse),
    ),
    tag = "scheduling"
)]
pub async fn schedule_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    body: Option<Json<ScheduleOrderRequest>>,
) -> ApiResult<DraftResponse> {
    let created_by = body.and_then(|Json(req)| req.created_by);
    let draft = state
        .services
        .scheduling
        .create_draft(order_id, created_by)
        .await?;
    Ok(Json(ApiResponse::success(draft)))
}

/// Create drafts for every unscheduled order; per-order failures are
/// reported, not fatal.
#[utoipa::path(
    post,
    path = "/api/v1/scheduling/backfill",
    summary = "Run scheduling backfill",
    request_body = BackfillRequest,
    responses(
        (status = 200, description = "Backfill completed", body = ApiResponse<BackfillReport>),
    ),
    tag = "scheduling"
)]
pub async fn run_backfill(
    State(state): State<AppState>,
    body: Option<Json<BackfillRequest>>,
) -> ApiResult<BackfillReport> {
    let created_by = body.and_then(|Json(req)| req.created_by);
    let report = state.services.scheduling.run_backfill(created_by).await?;
    Ok(Json(ApiResponse::success(report)))
}

/// Aggregate review statistics.
#[utoipa::path(
    get,
    path = "/api/v1/scheduling/stats",
    summary = "Scheduling statistics",
    responses(
        (status = 200, description = "Statistics computed", body = ApiResponse<SchedulingStats>),
    ),
    tag = "scheduling"
)]
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<SchedulingStats> {
    let stats = state.services.scheduling.stats().await?;
    Ok(Json(ApiResponse::success(stats)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_parses_known_values() {
        assert_eq!(
            parse_status("pending_review").unwrap(),
            DraftStatus::PendingReview
        );
        assert_eq!(parse_status("modified").unwrap(), DraftStatus::Modified);
        assert!(parse_status("bogus").is_err());
    }
}
