use crate::{
    db::DbPool,
    entities::{order, order_item, store},
    errors::ServiceError,
    services::zones::ZoneResolver,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

/// Complexity bucket derived from the additive score.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl Default for ComplexityLevel {
    fn default() -> Self {
        ComplexityLevel::Low
    }
}

/// Additive 0-100+ complexity score. Informational: surfaced in draft
/// reasoning, never used to gate scoring weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ToSchema)]
pub struct OrderComplexity {
    pub score: u32,
    pub level: ComplexityLevel,
}

/// Logistics profile of one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderRequirements {
    pub zone: String,
    pub total_weight_kg: f64,
    pub requires_special_handling: bool,
    pub complexity: OrderComplexity,
}

/// Everything the scheduling pipeline needs about one order, fetched once.
#[derive(Debug, Clone)]
pub struct OrderAnalysis {
    pub requirements: OrderRequirements,
    pub store: store::Model,
    pub items: Vec<order_item::Model>,
}

/// Derives an order's logistics profile from its line items and store.
#[derive(Clone)]
pub struct RequirementsAnalyzer {
    db_pool: Arc<DbPool>,
    zone_resolver: Arc<dyn ZoneResolver>,
}

impl RequirementsAnalyzer {
    pub fn new(db_pool: Arc<DbPool>, zone_resolver: Arc<dyn ZoneResolver>) -> Self {
        Self {
            db_pool,
            zone_resolver,
        }
    }

    /// Analyzes the order's logistical requirements.
    ///
    /// A missing store aborts scheduling for this order with `NotFound`;
    /// the order stays unscheduled for a later retry.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn analyze(&self, order: &order::Model) -> Result<OrderAnalysis, ServiceError> {
        let db = &*self.db_pool;

        let store = store::Entity::find_by_id(order.store_id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Store {} not found", order.store_id))
            })?;

        let items = order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(order.id))
            .all(db)
            .await
            .map_err(ServiceError::db_error)?;

        let zone = self.zone_resolver.resolve(&store);
        let total_weight_kg = total_weight_kg(&items);
        let requires_special_handling =
            items.iter().any(|item| item.requires_special_handling);
        let complexity = complexity(
            order,
            items.len(),
            total_weight_kg,
            requires_special_handling,
            Utc::now().date_naive(),
        );

        Ok(OrderAnalysis {
            requirements: OrderRequirements {
                zone,
                total_weight_kg,
                requires_special_handling,
                complexity,
            },
            store,
            items,
        })
    }
}

fn total_weight_kg(items: &[order_item::Model]) -> f64 {
    items
        .iter()
        .map(|item| {
            item.unit_weight_kg.to_f64().unwrap_or(0.0) * item.quantity as f64
        })
        .sum()
}

/// Additive complexity scoring. Each factor contributes a fixed increment
/// once its threshold is crossed.
pub fn complexity(
    order: &order::Model,
    item_count: usize,
    total_weight_kg: f64,
    requires_special_handling: bool,
    today: NaiveDate,
) -> OrderComplexity {
    let mut score = 0u32;

    let total = order.total_amount.to_f64().unwrap_or(0.0);
    if total > 500.0 {
        score += 30;
    } else if total > 200.0 {
        score += 15;
    }

    if item_count > 10 {
        score += 20;
    } else if item_count > 5 {
        score += 10;
    }

    if requires_special_handling {
        score += 25;
    }

    if total_weight_kg > 50.0 {
        score += 20;
    } else if total_weight_kg > 20.0 {
        score += 10;
    }

    if let Some(due) = order.delivery_date {
        let days_until = (due - today).num_days();
        if days_until <= 1 {
            score += 30;
        } else if days_until <= 2 {
            score += 15;
        }
    }

    let level = if score >= 60 {
        ComplexityLevel::High
    } else if score >= 30 {
        ComplexityLevel::Medium
    } else {
        ComplexityLevel::Low
    };

    OrderComplexity { score, level }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::order::{OrderPriority, OrderStatus};
    use chrono::Duration;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn order(total: Decimal, due_in_days: Option<i64>) -> order::Model {
        let now = Utc::now();
        order::Model {
            id: Uuid::new_v4(),
            order_number: "ORD-1001".into(),
            store_id: Uuid::new_v4(),
            status: OrderStatus::Confirmed,
            priority: OrderPriority::Normal,
            total_amount: total,
            order_date: now,
            delivery_date: due_in_days.map(|d| now.date_naive() + Duration::days(d)),
            assigned_distributor_id: None,
            notes: None,
            created_at: now,
            updated_at: None,
            version: 1,
        }
    }

    fn item(order_id: Uuid, quantity: i32, weight: Decimal, special: bool) -> order_item::Model {
        order_item::Model {
            id: Uuid::new_v4(),
            order_id,
            product_id: Uuid::new_v4(),
            product_name: "Sourdough loaf".into(),
            quantity,
            unit_price: dec!(4.50),
            total_price: dec!(4.50) * Decimal::from(quantity),
            unit_weight_kg: weight,
            requires_special_handling: special,
        }
    }

    #[test]
    fn large_urgent_special_order_is_high_complexity() {
        // 600 EUR (+30), 12 line items (+20), special handling (+25),
        // due tomorrow (+30).
        let o = order(dec!(600), Some(1));
        let c = complexity(&o, 12, 6.0, true, Utc::now().date_naive());
        assert_eq!(c.score, 105);
        assert_eq!(c.level, ComplexityLevel::High);
    }

    #[test]
    fn small_order_stays_low() {
        let o = order(dec!(45), Some(7));
        let c = complexity(&o, 2, 0.8, false, Utc::now().date_naive());
        assert_eq!(c.score, 0);
        assert_eq!(c.level, ComplexityLevel::Low);
    }

    #[test]
    fn mid_tier_thresholds_apply() {
        // 250 EUR (+15), 7 line items (+10), 25 kg (+10) => 35, medium.
        let o = order(dec!(250), None);
        let c = complexity(&o, 7, 25.2, false, Utc::now().date_naive());
        assert_eq!(c.score, 35);
        assert_eq!(c.level, ComplexityLevel::Medium);
    }

    #[test]
    fn weight_sums_quantity_times_unit_weight() {
        let o = order(dec!(100), None);
        let items = vec![
            item(o.id, 4, dec!(1.25), false),
            item(o.id, 2, dec!(0.5), false),
        ];
        assert!((total_weight_kg(&items) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn two_day_lead_time_scores_lighter_than_one_day() {
        let o1 = order(dec!(100), Some(1));
        let o2 = order(dec!(100), Some(2));
        let today = Utc::now().date_naive();
        let c1 = complexity(&o1, 0, 0.0, false, today);
        let c2 = complexity(&o2, 0, 0.0, false, today);
        assert_eq!(c1.score, 30);
        assert_eq!(c2.score, 15);
    }
}
