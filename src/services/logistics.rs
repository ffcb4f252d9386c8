use crate::{
    entities::{distributor, order, store},
    services::zones::haversine_km,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Distance used when either side has no coordinates: a middling
/// cross-town run.
const FALLBACK_DISTANCE_KM: f64 = 8.0;
const BASE_DURATION_MINUTES: f64 = 30.0;
const MINUTES_PER_KM: f64 = 2.0;

/// Placeholder route figures. Not a routing computation; this is the seam
/// where a real routing collaborator plugs in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, ToSchema)]
pub struct RouteEstimate {
    pub distance_km: f64,
    pub duration_minutes: i32,
    pub route_label: String,
}

/// Derives the suggested delivery slot and a coarse route estimate.
#[derive(Debug, Clone)]
pub struct LogisticsEstimator {
    default_delivery_time: String,
}

impl LogisticsEstimator {
    pub fn new(default_delivery_time: String) -> Self {
        Self {
            default_delivery_time,
        }
    }

    /// The order's requested date, pushed out one day when it coincides
    /// with the order's creation date so the bakery keeps its processing
    /// lead time. Orders without a requested date get tomorrow.
    pub fn suggested_delivery_date(&self, order: &order::Model, today: NaiveDate) -> NaiveDate {
        match order.delivery_date {
            Some(requested) if requested == order.order_date.date_naive() => {
                requested + chrono::Duration::days(1)
            }
            Some(requested) => requested,
            None => today + chrono::Duration::days(1),
        }
    }

    /// Store's preferred window start, else the configured default slot.
    pub fn delivery_time(&self, store: &store::Model) -> String {
        store
            .preferred_delivery_time
            .clone()
            .unwrap_or_else(|| self.default_delivery_time.clone())
    }

    /// Coarse distance/duration figures for the chosen candidate.
    pub fn route_estimate(
        &self,
        store: &store::Model,
        distributor: &distributor::Model,
        zone: &str,
    ) -> RouteEstimate {
        let distance_km = match (
            store.latitude,
            store.longitude,
            distributor.latitude,
            distributor.longitude,
        ) {
            (Some(s_lat), Some(s_lon), Some(d_lat), Some(d_lon)) => {
                haversine_km(s_lat, s_lon, d_lat, d_lon)
            }
            _ => FALLBACK_DISTANCE_KM,
        };
        let distance_km = (distance_km * 100.0).round() / 100.0;

        let duration_minutes =
            (BASE_DURATION_MINUTES + MINUTES_PER_KM * distance_km).round() as i32;

        RouteEstimate {
            distance_km,
            duration_minutes,
            route_label: format!("depot → {} ({})", store.name, zone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::distributor::{Availability, DistributorStatus};
    use crate::entities::order::{OrderPriority, OrderStatus};
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn estimator() -> LogisticsEstimator {
        LogisticsEstimator::new("08:00".into())
    }

    fn order_due(requested: Option<NaiveDate>) -> order::Model {
        let now = Utc::now();
        order::Model {
            id: Uuid::new_v4(),
            order_number: "ORD-3001".into(),
            store_id: Uuid::new_v4(),
            status: OrderStatus::Confirmed,
            priority: OrderPriority::Normal,
            total_amount: dec!(120),
            order_date: now,
            delivery_date: requested,
            assigned_distributor_id: None,
            notes: None,
            created_at: now,
            updated_at: None,
            version: 1,
        }
    }

    fn store_at(coords: Option<(f64, f64)>, preferred: Option<&str>) -> store::Model {
        store::Model {
            id: Uuid::new_v4(),
            name: "Harbor Bakery".into(),
            address: "Pier 4".into(),
            city: None,
            delivery_zone: None,
            latitude: coords.map(|c| c.0),
            longitude: coords.map(|c| c.1),
            preferred_delivery_time: preferred.map(String::from),
            assigned_distributor_id: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn distributor_at(coords: Option<(f64, f64)>) -> distributor::Model {
        distributor::Model {
            id: Uuid::new_v4(),
            name: "Dockside Routes".into(),
            email: "dockside@example.com".into(),
            status: DistributorStatus::Active,
            availability: Availability::Available,
            delivery_zone: None,
            max_daily_capacity: 5,
            vehicle_capacity: dec!(1000),
            performance_rating: 80.0,
            total_deliveries: 10,
            successful_deliveries: 9,
            current_workload: 0,
            latitude: coords.map(|c| c.0),
            longitude: coords.map(|c| c.1),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn same_day_request_is_pushed_one_day() {
        let today = Utc::now().date_naive();
        let order = order_due(Some(today));
        assert_eq!(
            estimator().suggested_delivery_date(&order, today),
            today + Duration::days(1)
        );
    }

    #[test]
    fn future_request_is_kept() {
        let today = Utc::now().date_naive();
        let requested = today + Duration::days(4);
        let order = order_due(Some(requested));
        assert_eq!(estimator().suggested_delivery_date(&order, today), requested);
    }

    #[test]
    fn missing_request_defaults_to_tomorrow() {
        let today = Utc::now().date_naive();
        let order = order_due(None);
        assert_eq!(
            estimator().suggested_delivery_date(&order, today),
            today + Duration::days(1)
        );
    }

    #[test]
    fn preferred_window_wins_over_default() {
        let store = store_at(None, Some("06:30"));
        assert_eq!(estimator().delivery_time(&store), "06:30");

        let bare = store_at(None, None);
        assert_eq!(estimator().delivery_time(&bare), "08:00");
    }

    #[test]
    fn route_estimate_uses_coordinates_when_known() {
        let store = store_at(Some((40.42, -3.70)), None);
        let distributor = distributor_at(Some((40.45, -3.70)));
        let route = estimator().route_estimate(&store, &distributor, "north");
        assert!(route.distance_km > 2.0 && route.distance_km < 5.0);
        assert_eq!(
            route.duration_minutes,
            (30.0 + 2.0 * route.distance_km).round() as i32
        );
        assert!(route.route_label.contains("Harbor Bakery"));
    }

    #[test]
    fn route_estimate_falls_back_without_coordinates() {
        let store = store_at(None, None);
        let distributor = distributor_at(None);
        let route = estimator().route_estimate(&store, &distributor, "general");
        assert_eq!(route.distance_km, FALLBACK_DISTANCE_KM);
        assert_eq!(route.duration_minutes, 46);
    }
}
