use std::sync::Arc;

use axum::Router;
use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, Set};
use tempfile::TempDir;
use uuid::Uuid;

use bakery_ops_api::{
    config::AppConfig,
    db,
    entities::delivery_trip::{self, TripStatus},
    entities::distributor::{self, Availability, DistributorStatus},
    entities::order::{self, OrderPriority, OrderStatus},
    entities::order_item,
    entities::store,
    events,
    handlers::AppServices,
    AppState,
};

/// Helper harness spinning up application state backed by a throwaway
/// SQLite database.
pub struct TestApp {
    pub state: AppState,
    pub router: Router,
    _tmp: TempDir,
    _event_task: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let tmp = TempDir::new().expect("temp dir");
        let db_path = tmp.path().join("bakery_ops_test.db");
        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_path.display()),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool).await.expect("migrations");

        let db_arc = Arc::new(pool);
        let (event_sender, event_rx) = events::channel(64);
        let event_task = tokio::spawn(events::process_events(event_rx));

        let services = AppServices::new(
            db_arc.clone(),
            Some(Arc::new(event_sender.clone())),
            &cfg.scheduling,
        );

        let state = AppState {
            db: db_arc,
            config: cfg,
            event_sender,
            services,
        };

        let router = Router::new()
            .nest("/api/v1", bakery_ops_api::api_v1_routes())
            .with_state(state.clone());

        Self {
            state,
            router,
            _tmp: tmp,
            _event_task: event_task,
        }
    }

    pub async fn seed_store(&self, zone: Option<&str>) -> store::Model {
        let now = Utc::now();
        store::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set("Central Bakery".to_string()),
            address: Set("1 Plaza Mayor, downtown".to_string()),
            city: Set(None),
            delivery_zone: Set(zone.map(String::from)),
            latitude: Set(None),
            longitude: Set(None),
            preferred_delivery_time: Set(Some("07:30".to_string())),
            assigned_distributor_id: Set(None),
            created_at: Set(now),
            updated_at: Set(None),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed store")
    }

    pub async fn seed_distributor(
        &self,
        name: &str,
        zone: Option<&str>,
        rating: f64,
        max_daily_capacity: i32,
    ) -> distributor::Model {
        let now = Utc::now();
        distributor::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            email: Set(format!(
                "{}@example.com",
                name.to_lowercase().replace(' ', ".")
            )),
            status: Set(DistributorStatus::Active),
            availability: Set(Availability::Available),
            delivery_zone: Set(zone.map(String::from)),
            max_daily_capacity: Set(max_daily_capacity),
            vehicle_capacity: Set(dec!(2000)),
            performance_rating: Set(rating),
            total_deliveries: Set(60),
            successful_deliveries: Set(57),
            current_workload: Set(0),
            latitude: Set(None),
            longitude: Set(None),
            created_at: Set(now),
            updated_at: Set(None),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed distributor")
    }

    pub async fn seed_order(
        &self,
        store_id: Uuid,
        total: Decimal,
        delivery_in_days: i64,
    ) -> order::Model {
        let now = Utc::now();
        let order = order::ActiveModel {
            id: Set(Uuid::new_v4()),
            order_number: Set(format!(
                "ORD-{}",
                &Uuid::new_v4().simple().to_string()[..8]
            )),
            store_id: Set(store_id),
            status: Set(OrderStatus::Confirmed),
            priority: Set(OrderPriority::Normal),
            total_amount: Set(total),
            order_date: Set(now),
            delivery_date: Set(Some(now.date_naive() + Duration::days(delivery_in_days))),
            assigned_distributor_id: Set(None),
            notes: Set(None),
            created_at: Set(now),
            updated_at: Set(None),
            version: Set(1),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed order");

        order_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            order_id: Set(order.id),
            product_id: Set(Uuid::new_v4()),
            product_name: Set("Sourdough loaf".to_string()),
            quantity: Set(6),
            unit_price: Set(dec!(4.50)),
            total_price: Set(dec!(27.00)),
            unit_weight_kg: Set(dec!(0.75)),
            requires_special_handling: Set(false),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed order item");

        order
    }

    pub async fn seed_trip(
        &self,
        distributor_id: Uuid,
        order_id: Uuid,
        date: NaiveDate,
    ) -> delivery_trip::Model {
        let now = Utc::now();
        delivery_trip::ActiveModel {
            id: Set(Uuid::new_v4()),
            trip_number: Set(format!(
                "TRIP-{}",
                &Uuid::new_v4().simple().to_string()[..8]
            )),
            distributor_id: Set(distributor_id),
            order_id: Set(order_id),
            status: Set(TripStatus::Planned),
            scheduled_date: Set(date),
            planned_start_time: Set("08:00".to_string()),
            total_amount: Set(dec!(50)),
            created_at: Set(now),
            updated_at: Set(None),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed trip")
    }
}
