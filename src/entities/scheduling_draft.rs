use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;
use uuid::Uuid;

use super::order::OrderPriority;

/// Review state of a scheduling draft. Every state except `PendingReview`
/// is terminal; re-deciding a terminal draft is a conflict.
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
pub enum DraftStatus {
    #[sea_orm(string_value = "pending_review")]
    PendingReview,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "modified")]
    Modified,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl DraftStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DraftStatus::PendingReview)
    }
}

/// A reviewable distributor-assignment suggestion for one order.
///
/// Drafts are append-only: rejected drafts stay behind as an audit trail
/// and a fresh scheduling attempt creates a new row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scheduling_drafts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub order_id: Uuid,

    pub suggested_distributor_id: Uuid,
    pub suggested_distributor_name: String,
    /// 0-100, two-decimal precision.
    pub confidence_score: f64,
    pub suggested_delivery_date: NaiveDate,
    pub suggested_priority: OrderPriority,

    /// Typed `ScoreReasoning`, stored as JSON.
    #[sea_orm(column_type = "Json")]
    pub reasoning: JsonValue,
    /// Typed `Vec<AlternativeSuggestion>` (up to 2), stored as JSON.
    #[sea_orm(column_type = "Json")]
    pub alternative_suggestions: JsonValue,
    /// Typed `RouteEstimate`, stored as JSON.
    #[sea_orm(column_type = "Json")]
    pub route_estimate: JsonValue,
    pub estimated_delivery_time: String,
    pub estimated_duration_minutes: i32,

    pub status: DraftStatus,
    pub admin_notes: Option<String>,
    /// Typed `DraftModifications`, stored as JSON; present only on
    /// modified approvals.
    #[sea_orm(column_type = "Json")]
    pub modifications: Option<JsonValue>,
    pub approved_distributor_id: Option<Uuid>,
    pub approved_delivery_date: Option<NaiveDate>,
    pub approved_priority: Option<OrderPriority>,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,

    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::distributor::Entity",
        from = "Column::SuggestedDistributorId",
        to = "super::distributor::Column::Id"
    )]
    SuggestedDistributor,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::distributor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SuggestedDistributor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
