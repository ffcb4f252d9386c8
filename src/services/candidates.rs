use crate::{
    db::DbPool,
    entities::delivery_trip::{self, TripStatus},
    entities::distributor::{self, DistributorStatus, ZONE_ALL},
    entities::order,
    errors::ServiceError,
};
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QuerySelect,
    RelationTrait,
};
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

/// An eligible distributor with its derived load and history figures.
#[derive(Debug, Clone)]
pub struct DistributorCandidate {
    pub distributor: distributor::Model,
    /// Non-cancelled trips already scheduled for the target date.
    pub trips_today: i64,
    /// Daily trip capacity after applying the configured default.
    pub effective_capacity: i32,
    /// Delivery success ratio in [0, 1].
    pub success_rate: f64,
    /// `trips_today` as a percentage of capacity.
    pub workload_pct: f64,
    /// Completed trips this distributor has run for the order's store.
    pub store_delivery_count: i64,
}

/// Queries the distributors eligible to serve a zone on a date.
///
/// Per-day load is derived from `delivery_trips` rather than read from the
/// cached workload counter, so concurrent approvals cannot skew eligibility.
#[derive(Clone)]
pub struct CandidatePool {
    db_pool: Arc<DbPool>,
    default_capacity: i32,
}

impl CandidatePool {
    pub fn new(db_pool: Arc<DbPool>, default_capacity: i32) -> Self {
        Self {
            db_pool,
            default_capacity,
        }
    }

    /// Returns every active distributor affiliated with the zone (or
    /// unaffiliated, or serving `all`) that still has trip capacity on the
    /// target date. An empty result is returned as-is; the caller decides
    /// whether that is a `NoCapacity` failure.
    #[instrument(skip(self), fields(zone = %zone, date = %target_date))]
    pub async fn eligible(
        &self,
        zone: &str,
        target_date: NaiveDate,
        store_id: Uuid,
    ) -> Result<Vec<DistributorCandidate>, ServiceError> {
        let db = &*self.db_pool;

        let zone_filter = Condition::any()
            .add(distributor::Column::DeliveryZone.is_null())
            .add(distributor::Column::DeliveryZone.eq(zone))
            .add(distributor::Column::DeliveryZone.eq(ZONE_ALL));

        let distributors = distributor::Entity::find()
            .filter(distributor::Column::Status.eq(DistributorStatus::Active))
            .filter(zone_filter)
            .all(db)
            .await
            .map_err(ServiceError::db_error)?;

        let mut candidates = Vec::with_capacity(distributors.len());
        for model in distributors {
            let capacity = if model.max_daily_capacity > 0 {
                model.max_daily_capacity
            } else {
                self.default_capacity
            };

            let trips_today = delivery_trip::Entity::find()
                .filter(delivery_trip::Column::DistributorId.eq(model.id))
                .filter(delivery_trip::Column::ScheduledDate.eq(target_date))
                .filter(delivery_trip::Column::Status.ne(TripStatus::Cancelled))
                .count(db)
                .await
                .map_err(ServiceError::db_error)? as i64;

            if trips_today >= capacity as i64 {
                debug!(
                    distributor_id = %model.id,
                    trips_today,
                    capacity,
                    "Skipping distributor at daily capacity"
                );
                continue;
            }

            let store_delivery_count = delivery_trip::Entity::find()
                .filter(delivery_trip::Column::DistributorId.eq(model.id))
                .filter(delivery_trip::Column::Status.eq(TripStatus::Completed))
                .join(JoinType::InnerJoin, delivery_trip::Relation::Order.def())
                .filter(order::Column::StoreId.eq(store_id))
                .count(db)
                .await
                .map_err(ServiceError::db_error)? as i64;

            let success_rate = model.success_rate();
            let workload_pct = 100.0 * trips_today as f64 / capacity as f64;

            candidates.push(DistributorCandidate {
                distributor: model,
                trips_today,
                effective_capacity: capacity,
                success_rate,
                workload_pct,
                store_delivery_count,
            });
        }

        debug!(count = candidates.len(), "Eligible distributor pool built");
        Ok(candidates)
    }
}
