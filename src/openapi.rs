use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bakery Ops API",
        version = "0.3.0",
        description = r#"
# Bakery Delivery Scheduling API

Distributor assignment and auto-scheduling for bakery delivery orders.

For each unscheduled order the engine analyzes logistical requirements,
scores every eligible distributor, and produces a reviewable draft with a
confidence score, structured reasoning, and ranked alternatives. Reviewers
approve (optionally with overrides) or reject drafts; approval atomically
assigns the order and opens a delivery trip.

## Pagination

List endpoints take `page` (default 1) and `limit` (default 20, max 100).

## Errors

Failures return a structured body with the HTTP status category, a
human-readable message, and a timestamp.
"#,
        contact(name = "Bakery Ops Team", email = "ops@bakeryops.dev"),
        license(name = "MIT"),
    ),
    paths(
        handlers::scheduling::list_drafts,
        handlers::scheduling::get_draft,
        handlers::scheduling::approve_draft,
        handlers::scheduling::reject_draft,
        handlers::scheduling::schedule_order,
        handlers::scheduling::run_backfill,
        handlers::scheduling::get_stats,
    ),
    components(schemas(
        crate::errors::ErrorResponse,
        crate::entities::order::OrderStatus,
        crate::entities::order::OrderPriority,
        crate::entities::scheduling_draft::DraftStatus,
        crate::services::requirements::ComplexityLevel,
        crate::services::requirements::OrderComplexity,
        crate::services::requirements::OrderRequirements,
        crate::services::scoring::SubScores,
        crate::services::scoring::ScoreReasoning,
        crate::services::scoring::ScoredCandidate,
        crate::services::scoring::AlternativeSuggestion,
        crate::services::logistics::RouteEstimate,
        crate::services::scheduling::DraftModifications,
        crate::services::scheduling::ApproveDraftRequest,
        crate::services::scheduling::RejectDraftRequest,
        crate::services::scheduling::DraftResponse,
        crate::services::scheduling::DistributorAccuracy,
        crate::services::scheduling::SchedulingStats,
        crate::services::scheduling::BackfillFailure,
        crate::services::scheduling::BackfillReport,
        handlers::scheduling::ScheduleOrderRequest,
        handlers::scheduling::BackfillRequest,
    )),
    tags(
        (name = "scheduling", description = "Distributor assignment drafts and review")
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
