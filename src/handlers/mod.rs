pub mod scheduling;

use crate::config::SchedulingConfig;
use crate::db::DbPool;
use crate::events::EventSender;
use crate::services::candidates::CandidatePool;
use crate::services::logistics::LogisticsEstimator;
use crate::services::requirements::RequirementsAnalyzer;
use crate::services::scheduling::SchedulingService;
use crate::services::trips::TripService;
use crate::services::zones::{KeywordZoneResolver, ZoneResolver};
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub scheduling: Arc<SchedulingService>,
    pub trips: Arc<TripService>,
}

impl AppServices {
    /// Build the service container with the default zone resolver.
    pub fn new(
        db_pool: Arc<DbPool>,
        event_sender: Option<Arc<EventSender>>,
        scheduling_cfg: &SchedulingConfig,
    ) -> Self {
        let zone_resolver: Arc<dyn ZoneResolver> = Arc::new(KeywordZoneResolver);
        Self::with_zone_resolver(db_pool, event_sender, scheduling_cfg, zone_resolver)
    }

    /// Build the service container with a custom zone resolver (e.g. a
    /// geocoding-backed one).
    pub fn with_zone_resolver(
        db_pool: Arc<DbPool>,
        event_sender: Option<Arc<EventSender>>,
        scheduling_cfg: &SchedulingConfig,
        zone_resolver: Arc<dyn ZoneResolver>,
    ) -> Self {
        let analyzer = RequirementsAnalyzer::new(db_pool.clone(), zone_resolver);
        let candidates = CandidatePool::new(db_pool.clone(), scheduling_cfg.max_daily_capacity);
        let logistics =
            LogisticsEstimator::new(scheduling_cfg.default_delivery_time.clone());
        let trips = TripService::new(db_pool.clone());

        let scheduling = Arc::new(SchedulingService::new(
            db_pool,
            event_sender,
            analyzer,
            candidates,
            logistics,
            trips.clone(),
        ));

        Self {
            scheduling,
            trips: Arc::new(trips),
        }
    }
}
