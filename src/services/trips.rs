use crate::{
    db::DbPool,
    entities::delivery_trip::{self, TripStatus},
    errors::ServiceError,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// Fields required to open a delivery trip.
#[derive(Debug, Clone)]
pub struct NewTrip {
    pub distributor_id: Uuid,
    pub order_id: Uuid,
    pub scheduled_date: NaiveDate,
    pub planned_start_time: String,
    pub total_amount: Decimal,
}

/// Service for managing delivery trips.
#[derive(Clone)]
pub struct TripService {
    db_pool: Arc<DbPool>,
}

impl TripService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Inserts a trip on the given connection. Callers running inside a
    /// transaction pass the transaction handle so the insert commits or
    /// rolls back with the rest of the unit.
    pub async fn insert_trip<C: ConnectionTrait>(
        &self,
        conn: &C,
        input: NewTrip,
    ) -> Result<delivery_trip::Model, ServiceError> {
        let now = Utc::now();
        let trip_id = Uuid::new_v4();

        let active = delivery_trip::ActiveModel {
            id: Set(trip_id),
            trip_number: Set(trip_number(input.scheduled_date, trip_id)),
            distributor_id: Set(input.distributor_id),
            order_id: Set(input.order_id),
            status: Set(TripStatus::Planned),
            scheduled_date: Set(input.scheduled_date),
            planned_start_time: Set(input.planned_start_time),
            total_amount: Set(input.total_amount),
            created_at: Set(now),
            updated_at: Set(Some(now)),
        };

        let model = active.insert(conn).await.map_err(ServiceError::db_error)?;
        Ok(model)
    }

    /// Gets a trip by ID.
    #[instrument(skip(self))]
    pub async fn get_trip(
        &self,
        trip_id: Uuid,
    ) -> Result<Option<delivery_trip::Model>, ServiceError> {
        let db = &*self.db_pool;
        delivery_trip::Entity::find_by_id(trip_id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)
    }

    /// Lists a distributor's trips for one date, oldest first.
    #[instrument(skip(self))]
    pub async fn trips_for_distributor_on(
        &self,
        distributor_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<delivery_trip::Model>, ServiceError> {
        let db = &*self.db_pool;
        delivery_trip::Entity::find()
            .filter(delivery_trip::Column::DistributorId.eq(distributor_id))
            .filter(delivery_trip::Column::ScheduledDate.eq(date))
            .order_by_asc(delivery_trip::Column::CreatedAt)
            .all(db)
            .await
            .map_err(ServiceError::db_error)
    }
}

fn trip_number(date: NaiveDate, trip_id: Uuid) -> String {
    format!(
        "TRIP-{}-{}",
        date.format("%Y%m%d"),
        &trip_id.simple().to_string()[..8].to_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_numbers_embed_date_and_id() {
        let id = Uuid::new_v4();
        let number = trip_number(NaiveDate::from_ymd_opt(2025, 11, 9).unwrap(), id);
        assert!(number.starts_with("TRIP-20251109-"));
        assert_eq!(number.len(), "TRIP-20251109-".len() + 8);
    }
}
