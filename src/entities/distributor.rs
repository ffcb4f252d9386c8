use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Zone sentinel meaning "serves every zone".
pub const ZONE_ALL: &str = "all";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    DeriveActiveEnum,
    strum::Display,
    strum::EnumString,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DistributorStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    DeriveActiveEnum,
    strum::Display,
    strum::EnumString,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Availability {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "busy")]
    Busy,
    #[sea_orm(string_value = "off_duty")]
    OffDuty,
}

/// Delivery distributor roster row.
///
/// `current_workload` is a cumulative active-assignment counter. It is only
/// ever changed with an atomic column increment inside the approval
/// transaction; per-day load is derived from `delivery_trips`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "distributors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub status: DistributorStatus,
    pub availability: Availability,
    /// `None` = unaffiliated, a zone name, or the sentinel `all`.
    pub delivery_zone: Option<String>,
    pub max_daily_capacity: i32,
    /// Order-value threshold the vehicle comfortably carries.
    pub vehicle_capacity: Decimal,
    /// 0-100 cumulative rating.
    pub performance_rating: f64,
    pub total_deliveries: i64,
    pub successful_deliveries: i64,
    pub current_workload: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model {
    /// Success ratio in [0, 1]; distributors with no history get the
    /// neutral prior of 0.85.
    pub fn success_rate(&self) -> f64 {
        if self.total_deliveries > 0 {
            self.successful_deliveries as f64 / self.total_deliveries as f64
        } else {
            0.85
        }
    }

    /// Whether this distributor covers the given zone.
    pub fn serves_zone(&self, zone: &str) -> bool {
        match self.delivery_zone.as_deref() {
            None => true,
            Some(z) => z.eq_ignore_ascii_case(zone) || z.eq_ignore_ascii_case(ZONE_ALL),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::delivery_trip::Entity")]
    DeliveryTrips,
}

impl Related<super::delivery_trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryTrips.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn distributor(zone: Option<&str>) -> Model {
        Model {
            id: Uuid::new_v4(),
            name: "North Route".into(),
            email: "north@example.com".into(),
            status: DistributorStatus::Active,
            availability: Availability::Available,
            delivery_zone: zone.map(String::from),
            max_daily_capacity: 5,
            vehicle_capacity: dec!(1500),
            performance_rating: 90.0,
            total_deliveries: 0,
            successful_deliveries: 0,
            current_workload: 0,
            latitude: None,
            longitude: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn zone_affiliation_rules() {
        assert!(distributor(None).serves_zone("north"));
        assert!(distributor(Some("all")).serves_zone("north"));
        assert!(distributor(Some("North")).serves_zone("north"));
        assert!(!distributor(Some("south")).serves_zone("north"));
    }

    #[test]
    fn success_rate_defaults_without_history() {
        let fresh = distributor(None);
        assert!((fresh.success_rate() - 0.85).abs() < f64::EPSILON);

        let mut seasoned = distributor(None);
        seasoned.total_deliveries = 200;
        seasoned.successful_deliveries = 190;
        assert!((seasoned.success_rate() - 0.95).abs() < 1e-9);
    }
}
