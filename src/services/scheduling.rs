use crate::{
    db::DbPool,
    entities::distributor,
    entities::order::{self, OrderPriority, OrderStatus},
    entities::scheduling_draft::{self, DraftStatus},
    errors::ServiceError,
    events::{Event, EventSender},
    services::candidates::CandidatePool,
    services::logistics::{LogisticsEstimator, RouteEstimate},
    services::requirements::RequirementsAnalyzer,
    services::scoring::{
        AlternativeSuggestion, ScoreReasoning, ScoringContext, ScoringEngine,
    },
    services::trips::{NewTrip, TripService},
};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;

const DEFAULT_REVIEWER: &str = "admin";
const AUTO_SCHEDULER: &str = "auto_scheduler";

/// Reviewer overrides applied on approval. Any present field replaces the
/// suggested value; absent fields keep the suggestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct DraftModifications {
    pub distributor_id: Option<Uuid>,
    pub delivery_date: Option<NaiveDate>,
    pub priority: Option<OrderPriority>,
}

impl DraftModifications {
    pub fn is_empty(&self) -> bool {
        self.distributor_id.is_none() && self.delivery_date.is_none() && self.priority.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ApproveDraftRequest {
    pub modifications: Option<DraftModifications>,
    pub admin_notes: Option<String>,
    /// Spin up a delivery trip alongside the assignment (default true).
    #[serde(default = "default_create_trip")]
    pub create_trip: bool,
    pub reviewed_by: Option<String>,
}

impl Default for ApproveDraftRequest {
    fn default() -> Self {
        Self {
            modifications: None,
            admin_notes: None,
            create_trip: default_create_trip(),
            reviewed_by: None,
        }
    }
}

fn default_create_trip() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RejectDraftRequest {
    pub reason: String,
    /// Park the order for direct human assignment (default false).
    #[serde(default)]
    pub reassign_to_manual: bool,
    pub reviewed_by: Option<String>,
}

/// Full draft view returned to reviewers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DraftResponse {
    pub id: Uuid,
    pub order_id: Uuid,
    pub suggested_distributor_id: Uuid,
    pub suggested_distributor_name: String,
    pub confidence_score: f64,
    pub suggested_delivery_date: NaiveDate,
    pub suggested_priority: OrderPriority,
    pub reasoning: ScoreReasoning,
    pub alternative_suggestions: Vec<AlternativeSuggestion>,
    pub route_estimate: RouteEstimate,
    pub estimated_delivery_time: String,
    pub estimated_duration_minutes: i32,
    pub status: DraftStatus,
    pub admin_notes: Option<String>,
    pub modifications: Option<DraftModifications>,
    pub approved_distributor_id: Option<Uuid>,
    pub approved_delivery_date: Option<NaiveDate>,
    pub approved_priority: Option<OrderPriority>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Per-distributor suggestion accuracy over decided drafts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DistributorAccuracy {
    pub distributor_id: Uuid,
    pub distributor_name: String,
    pub suggestions: u64,
    pub accepted_as_suggested: u64,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SchedulingStats {
    pub total_drafts: u64,
    pub pending: u64,
    pub approved: u64,
    pub modified: u64,
    pub rejected: u64,
    /// (approved + modified) / decided.
    pub approval_rate: f64,
    pub average_confidence: f64,
    pub distributor_accuracy: Vec<DistributorAccuracy>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BackfillFailure {
    pub order_id: Uuid,
    pub order_number: String,
    pub error: String,
}

/// Outcome of one backfill run. Failures never abort the run.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BackfillReport {
    pub processed: u64,
    pub created: u64,
    pub skipped: u64,
    pub failed: u64,
    pub failures: Vec<BackfillFailure>,
}

/// Owns the scheduling-draft state machine: creation, review, and the
/// atomic side effects of approval.
#[derive(Clone)]
pub struct SchedulingService {
    db_pool: Arc<DbPool>,
    event_sender: Option<Arc<EventSender>>,
    analyzer: RequirementsAnalyzer,
    candidates: CandidatePool,
    scoring: ScoringEngine,
    logistics: LogisticsEstimator,
    trips: TripService,
}

impl SchedulingService {
    pub fn new(
        db_pool: Arc<DbPool>,
        event_sender: Option<Arc<EventSender>>,
        analyzer: RequirementsAnalyzer,
        candidates: CandidatePool,
        logistics: LogisticsEstimator,
        trips: TripService,
    ) -> Self {
        Self {
            db_pool,
            event_sender,
            analyzer,
            candidates,
            scoring: ScoringEngine::new(),
            logistics,
            trips,
        }
    }

    /// Runs the full analysis pipeline for one order and persists a
    /// pending draft. Nothing is persisted when any stage fails.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn create_draft(
        &self,
        order_id: Uuid,
        created_by: Option<String>,
    ) -> Result<DraftResponse, ServiceError> {
        let db = &*self.db_pool;

        let order = order::Entity::find_by_id(order_id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Order {} not found", order_id)))?;

        if !order.status.is_schedulable() || order.assigned_distributor_id.is_some() {
            return Err(ServiceError::Conflict(format!(
                "Order {} is not awaiting scheduling (status: {})",
                order_id, order.status
            )));
        }

        let pending = scheduling_draft::Entity::find()
            .filter(scheduling_draft::Column::OrderId.eq(order_id))
            .filter(scheduling_draft::Column::Status.eq(DraftStatus::PendingReview))
            .one(db)
            .await
            .map_err(ServiceError::db_error)?;
        if let Some(existing) = pending {
            return Err(ServiceError::Conflict(format!(
                "Order {} already has a pending draft ({})",
                order_id, existing.id
            )));
        }

        let analysis = self.analyzer.analyze(&order).await?;
        let zone = analysis.requirements.zone.clone();

        let today = Utc::now().date_naive();
        let suggested_date = self.logistics.suggested_delivery_date(&order, today);

        let pool = self
            .candidates
            .eligible(&zone, suggested_date, order.store_id)
            .await?;
        if pool.is_empty() {
            return Err(ServiceError::NoCapacity(format!(
                "No eligible distributor for zone '{}' on {}",
                zone, suggested_date
            )));
        }

        let ctx = ScoringContext {
            order: &order,
            store: &analysis.store,
            requirements: &analysis.requirements,
        };
        let ranked = self.scoring.rank(&pool, &ctx).ok_or_else(|| {
            ServiceError::InternalError("Scoring produced no ranked candidates".to_string())
        })?;

        let chosen = pool
            .iter()
            .find(|c| c.distributor.id == ranked.primary.distributor_id)
            .ok_or_else(|| {
                ServiceError::InternalError(
                    "Primary suggestion missing from candidate pool".to_string(),
                )
            })?;

        let route = self
            .logistics
            .route_estimate(&analysis.store, &chosen.distributor, &zone);
        let delivery_time = self.logistics.delivery_time(&analysis.store);

        let now = Utc::now();
        let draft_id = Uuid::new_v4();
        let active = scheduling_draft::ActiveModel {
            id: Set(draft_id),
            order_id: Set(order.id),
            suggested_distributor_id: Set(ranked.primary.distributor_id),
            suggested_distributor_name: Set(ranked.primary.distributor_name.clone()),
            confidence_score: Set(ranked.primary.confidence_score),
            suggested_delivery_date: Set(suggested_date),
            suggested_priority: Set(order.priority),
            reasoning: Set(to_json(&ranked.primary.reasoning)?),
            alternative_suggestions: Set(to_json(&ranked.alternatives)?),
            route_estimate: Set(to_json(&route)?),
            estimated_delivery_time: Set(delivery_time),
            estimated_duration_minutes: Set(route.duration_minutes),
            status: Set(DraftStatus::PendingReview),
            admin_notes: Set(None),
            modifications: Set(None),
            approved_distributor_id: Set(None),
            approved_delivery_date: Set(None),
            approved_priority: Set(None),
            reviewed_by: Set(None),
            reviewed_at: Set(None),
            created_by: Set(created_by.unwrap_or_else(|| AUTO_SCHEDULER.to_string())),
            created_at: Set(now),
            updated_at: Set(Some(now)),
        };

        let model = active.insert(db).await.map_err(ServiceError::db_error)?;

        info!(
            draft_id = %model.id,
            order_id = %order.id,
            distributor = %model.suggested_distributor_name,
            confidence = model.confidence_score,
            "Scheduling draft created"
        );

        self.emit(Event::DraftCreated {
            draft_id: model.id,
            order_id: order.id,
            confidence_score: model.confidence_score,
        })
        .await;

        model_to_response(model)
    }

    /// Approves a pending draft, applying any reviewer overrides.
    ///
    /// The draft update, the order assignment, the trip insert, and the
    /// workload bump run in one transaction; either all land or none do.
    #[instrument(skip(self, request), fields(draft_id = %draft_id))]
    pub async fn approve_draft(
        &self,
        draft_id: Uuid,
        request: ApproveDraftRequest,
    ) -> Result<DraftResponse, ServiceError> {
        let db = &*self.db_pool;

        if let Some(mods) = &request.modifications {
            if mods.is_empty() {
                return Err(ServiceError::ValidationError(
                    "Modifications payload is present but empty".to_string(),
                ));
            }
        }

        let txn = db.begin().await.map_err(ServiceError::db_error)?;

        let draft = scheduling_draft::Entity::find_by_id(draft_id)
            .one(&txn)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Scheduling draft {} not found", draft_id))
            })?;

        if draft.status.is_terminal() {
            return Err(ServiceError::Conflict(format!(
                "Draft {} was already decided ({})",
                draft_id, draft.status
            )));
        }

        let mods = request.modifications.clone().unwrap_or_default();
        let modified = !mods.is_empty();
        let final_distributor_id = mods.distributor_id.unwrap_or(draft.suggested_distributor_id);
        let final_delivery_date = mods.delivery_date.unwrap_or(draft.suggested_delivery_date);
        let final_priority = mods.priority.unwrap_or(draft.suggested_priority);
        let reviewer = request
            .reviewed_by
            .clone()
            .unwrap_or_else(|| DEFAULT_REVIEWER.to_string());
        let now = Utc::now();

        let order = order::Entity::find_by_id(draft.order_id)
            .one(&txn)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Order {} not found", draft.order_id))
            })?;

        if order.status == OrderStatus::Scheduled || order.assigned_distributor_id.is_some() {
            return Err(ServiceError::Conflict(format!(
                "Order {} is already scheduled",
                order.id
            )));
        }

        let order_id = order.id;
        let total_amount = order.total_amount;

        let mut draft_active: scheduling_draft::ActiveModel = draft.into();
        draft_active.status = Set(if modified {
            DraftStatus::Modified
        } else {
            DraftStatus::Approved
        });
        draft_active.admin_notes = Set(request.admin_notes.clone());
        draft_active.modifications = Set(if modified {
            Some(to_json(&mods)?)
        } else {
            None
        });
        draft_active.approved_distributor_id = Set(Some(final_distributor_id));
        draft_active.approved_delivery_date = Set(Some(final_delivery_date));
        draft_active.approved_priority = Set(Some(final_priority));
        draft_active.reviewed_by = Set(Some(reviewer));
        draft_active.reviewed_at = Set(Some(now));
        draft_active.updated_at = Set(Some(now));
        let updated_draft = draft_active
            .update(&txn)
            .await
            .map_err(ServiceError::db_error)?;

        let mut order_active: order::ActiveModel = order.into();
        order_active.assigned_distributor_id = Set(Some(final_distributor_id));
        order_active.delivery_date = Set(Some(final_delivery_date));
        order_active.priority = Set(final_priority);
        order_active.status = Set(OrderStatus::Scheduled);
        order_active.updated_at = Set(Some(now));
        order_active.version = Set(order_active.version.unwrap() + 1);
        order_active
            .update(&txn)
            .await
            .map_err(ServiceError::db_error)?;

        let trip = if request.create_trip {
            Some(
                self.trips
                    .insert_trip(
                        &txn,
                        NewTrip {
                            distributor_id: final_distributor_id,
                            order_id,
                            scheduled_date: final_delivery_date,
                            planned_start_time: updated_draft.estimated_delivery_time.clone(),
                            total_amount,
                        },
                    )
                    .await?,
            )
        } else {
            None
        };

        // Atomic column increment; zero affected rows means the final
        // distributor does not exist and the whole unit rolls back.
        let bump = distributor::Entity::update_many()
            .col_expr(
                distributor::Column::CurrentWorkload,
                Expr::col(distributor::Column::CurrentWorkload).add(1),
            )
            .filter(distributor::Column::Id.eq(final_distributor_id))
            .exec(&txn)
            .await
            .map_err(ServiceError::db_error)?;
        if bump.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Distributor {} not found",
                final_distributor_id
            )));
        }

        txn.commit().await.map_err(ServiceError::db_error)?;

        info!(
            draft_id = %draft_id,
            order_id = %order_id,
            distributor_id = %final_distributor_id,
            modified = modified,
            "Scheduling draft approved"
        );

        self.emit(Event::DraftApproved {
            draft_id,
            order_id,
            distributor_id: final_distributor_id,
            modified,
        })
        .await;
        self.emit(Event::OrderScheduled {
            order_id,
            distributor_id: final_distributor_id,
        })
        .await;
        if let Some(trip) = trip {
            self.emit(Event::TripCreated {
                trip_id: trip.id,
                order_id,
                distributor_id: final_distributor_id,
            })
            .await;
        }

        model_to_response(updated_draft)
    }

    /// Rejects a pending draft. The reason is mandatory and is stored as
    /// the reviewer's note; optionally parks the order for manual
    /// scheduling.
    #[instrument(skip(self, request), fields(draft_id = %draft_id))]
    pub async fn reject_draft(
        &self,
        draft_id: Uuid,
        request: RejectDraftRequest,
    ) -> Result<DraftResponse, ServiceError> {
        let db = &*self.db_pool;

        let reason = request.reason.trim();
        if reason.is_empty() {
            return Err(ServiceError::ValidationError(
                "A rejection reason is required".to_string(),
            ));
        }

        let txn = db.begin().await.map_err(ServiceError::db_error)?;

        let draft = scheduling_draft::Entity::find_by_id(draft_id)
            .one(&txn)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Scheduling draft {} not found", draft_id))
            })?;

        if draft.status.is_terminal() {
            return Err(ServiceError::Conflict(format!(
                "Draft {} was already decided ({})",
                draft_id, draft.status
            )));
        }

        let order_id = draft.order_id;
        let reviewer = request
            .reviewed_by
            .clone()
            .unwrap_or_else(|| DEFAULT_REVIEWER.to_string());
        let now = Utc::now();

        let mut draft_active: scheduling_draft::ActiveModel = draft.into();
        draft_active.status = Set(DraftStatus::Rejected);
        draft_active.admin_notes = Set(Some(reason.to_string()));
        draft_active.reviewed_by = Set(Some(reviewer));
        draft_active.reviewed_at = Set(Some(now));
        draft_active.updated_at = Set(Some(now));
        let updated_draft = draft_active
            .update(&txn)
            .await
            .map_err(ServiceError::db_error)?;

        if request.reassign_to_manual {
            let order = order::Entity::find_by_id(order_id)
                .one(&txn)
                .await
                .map_err(ServiceError::db_error)?;
            if let Some(order) = order {
                if order.status != OrderStatus::Scheduled {
                    let mut order_active: order::ActiveModel = order.into();
                    order_active.status = Set(OrderStatus::ManualScheduling);
                    order_active.updated_at = Set(Some(now));
                    order_active.version = Set(order_active.version.unwrap() + 1);
                    order_active
                        .update(&txn)
                        .await
                        .map_err(ServiceError::db_error)?;
                }
            }
        }

        txn.commit().await.map_err(ServiceError::db_error)?;

        info!(draft_id = %draft_id, order_id = %order_id, "Scheduling draft rejected");
        self.emit(Event::DraftRejected { draft_id, order_id }).await;

        model_to_response(updated_draft)
    }

    /// Fetches one draft with its full reasoning.
    #[instrument(skip(self))]
    pub async fn get_draft(&self, draft_id: Uuid) -> Result<DraftResponse, ServiceError> {
        let db = &*self.db_pool;
        let model = scheduling_draft::Entity::find_by_id(draft_id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Scheduling draft {} not found", draft_id))
            })?;
        model_to_response(model)
    }

    /// Lists drafts, newest first, optionally filtered by status.
    #[instrument(skip(self))]
    pub async fn list_drafts(
        &self,
        status: Option<DraftStatus>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<DraftResponse>, u64), ServiceError> {
        let db = &*self.db_pool;
        let page = page.max(1);
        let limit = limit.clamp(1, 100);

        let mut query = scheduling_draft::Entity::find();
        if let Some(status) = status {
            query = query.filter(scheduling_draft::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(scheduling_draft::Column::CreatedAt)
            .paginate(db, limit);

        let total = paginator.num_items().await.map_err(ServiceError::db_error)?;
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(ServiceError::db_error)?;

        let drafts = models
            .into_iter()
            .map(model_to_response)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((drafts, total))
    }

    /// Attempts to create drafts for every unscheduled order. A failure on
    /// one order is recorded and the run continues.
    #[instrument(skip(self))]
    pub async fn run_backfill(
        &self,
        created_by: Option<String>,
    ) -> Result<BackfillReport, ServiceError> {
        let db = &*self.db_pool;

        let unscheduled = order::Entity::find()
            .filter(order::Column::AssignedDistributorId.is_null())
            .filter(
                order::Column::Status
                    .is_in([OrderStatus::Draft, OrderStatus::Confirmed]),
            )
            .order_by_asc(order::Column::CreatedAt)
            .all(db)
            .await
            .map_err(ServiceError::db_error)?;

        let mut report = BackfillReport {
            processed: 0,
            created: 0,
            skipped: 0,
            failed: 0,
            failures: Vec::new(),
        };

        let created_by = created_by.unwrap_or_else(|| AUTO_SCHEDULER.to_string());
        for order in unscheduled {
            report.processed += 1;
            match self
                .create_draft(order.id, Some(created_by.clone()))
                .await
            {
                Ok(_) => report.created += 1,
                Err(ServiceError::Conflict(_)) => {
                    // Already has a pending draft; nothing to do.
                    report.skipped += 1;
                }
                Err(err) => {
                    warn!(
                        order_id = %order.id,
                        order_number = %order.order_number,
                        error = %err,
                        "Backfill failed for order; continuing"
                    );
                    report.failed += 1;
                    report.failures.push(BackfillFailure {
                        order_id: order.id,
                        order_number: order.order_number.clone(),
                        error: err.response_message(),
                    });
                }
            }
        }

        info!(
            processed = report.processed,
            created = report.created,
            skipped = report.skipped,
            failed = report.failed,
            "Scheduling backfill complete"
        );
        Ok(report)
    }

    /// Aggregate review statistics across all drafts.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<SchedulingStats, ServiceError> {
        let db = &*self.db_pool;
        let drafts = scheduling_draft::Entity::find()
            .all(db)
            .await
            .map_err(ServiceError::db_error)?;

        let total_drafts = drafts.len() as u64;
        let mut pending = 0u64;
        let mut approved = 0u64;
        let mut modified = 0u64;
        let mut rejected = 0u64;
        let mut confidence_sum = 0.0;

        struct Tally {
            name: String,
            suggestions: u64,
            accepted: u64,
        }
        let mut per_distributor: HashMap<Uuid, Tally> = HashMap::new();

        for draft in &drafts {
            confidence_sum += draft.confidence_score;
            match draft.status {
                DraftStatus::PendingReview => pending += 1,
                DraftStatus::Approved => approved += 1,
                DraftStatus::Modified => modified += 1,
                DraftStatus::Rejected => rejected += 1,
            }

            if draft.status.is_terminal() {
                let tally = per_distributor
                    .entry(draft.suggested_distributor_id)
                    .or_insert_with(|| Tally {
                        name: draft.suggested_distributor_name.clone(),
                        suggestions: 0,
                        accepted: 0,
                    });
                tally.suggestions += 1;
                if draft.approved_distributor_id == Some(draft.suggested_distributor_id) {
                    tally.accepted += 1;
                }
            }
        }

        let decided = approved + modified + rejected;
        let approval_rate = if decided > 0 {
            (approved + modified) as f64 / decided as f64
        } else {
            0.0
        };
        let average_confidence = if total_drafts > 0 {
            confidence_sum / total_drafts as f64
        } else {
            0.0
        };

        let mut distributor_accuracy: Vec<DistributorAccuracy> = per_distributor
            .into_iter()
            .map(|(distributor_id, tally)| DistributorAccuracy {
                distributor_id,
                distributor_name: tally.name,
                suggestions: tally.suggestions,
                accepted_as_suggested: tally.accepted,
                accuracy: tally.accepted as f64 / tally.suggestions as f64,
            })
            .collect();
        distributor_accuracy.sort_by(|a, b| b.suggestions.cmp(&a.suggestions));

        Ok(SchedulingStats {
            total_drafts,
            pending,
            approved,
            modified,
            rejected,
            approval_rate,
            average_confidence,
            distributor_accuracy,
        })
    }

    async fn emit(&self, event: Event) {
        if let Some(sender) = &self.event_sender {
            if let Err(e) = sender.send(event).await {
                error!(error = %e, "Failed to send scheduling event");
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, ServiceError> {
    serde_json::to_value(value)
        .map_err(|e| ServiceError::InternalError(format!("Failed to serialize field: {}", e)))
}

fn model_to_response(model: scheduling_draft::Model) -> Result<DraftResponse, ServiceError> {
    let reasoning: ScoreReasoning =
        serde_json::from_value(model.reasoning.clone()).unwrap_or_default();
    let alternative_suggestions: Vec<AlternativeSuggestion> =
        serde_json::from_value(model.alternative_suggestions.clone()).unwrap_or_default();
    let route_estimate: RouteEstimate =
        serde_json::from_value(model.route_estimate.clone()).unwrap_or_default();
    let modifications: Option<DraftModifications> = model
        .modifications
        .clone()
        .and_then(|raw| serde_json::from_value(raw).ok());

    Ok(DraftResponse {
        id: model.id,
        order_id: model.order_id,
        suggested_distributor_id: model.suggested_distributor_id,
        suggested_distributor_name: model.suggested_distributor_name,
        confidence_score: model.confidence_score,
        suggested_delivery_date: model.suggested_delivery_date,
        suggested_priority: model.suggested_priority,
        reasoning,
        alternative_suggestions,
        route_estimate,
        estimated_delivery_time: model.estimated_delivery_time,
        estimated_duration_minutes: model.estimated_duration_minutes,
        status: model.status,
        admin_notes: model.admin_notes,
        modifications,
        approved_distributor_id: model.approved_distributor_id,
        approved_delivery_date: model.approved_delivery_date,
        approved_priority: model.approved_priority,
        reviewed_by: model.reviewed_by,
        reviewed_at: model.reviewed_at,
        created_by: model.created_by,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
