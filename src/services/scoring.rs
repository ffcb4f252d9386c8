use crate::{
    entities::{order, store},
    services::candidates::DistributorCandidate,
    services::requirements::{ComplexityLevel, OrderRequirements},
    services::zones::haversine_km,
};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Fixed factor weights; they sum to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub location: f64,
    pub availability: f64,
    pub performance: f64,
    pub experience: f64,
    pub capacity_fit: f64,
    pub priority_match: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 0.25,
            availability: 0.20,
            performance: 0.20,
            experience: 0.15,
            capacity_fit: 0.15,
            priority_match: 0.05,
        }
    }
}

/// The six sub-scores, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default, ToSchema)]
pub struct SubScores {
    pub location: f64,
    pub availability: f64,
    pub performance: f64,
    pub experience: f64,
    pub capacity_fit: f64,
    pub priority_match: f64,
}

/// Deterministic, reproducible explanation of one candidate's score.
/// Generated from fixed sub-score thresholds, never from free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, ToSchema)]
pub struct ScoreReasoning {
    pub zone_match: bool,
    pub location: String,
    pub availability: String,
    pub performance: String,
    pub experience: String,
    pub capacity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    pub complexity: ComplexityLevel,
    pub highlights: Vec<String>,
}

/// One candidate with its computed confidence and explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoredCandidate {
    pub distributor_id: Uuid,
    pub distributor_name: String,
    /// 0-100, two-decimal precision.
    pub confidence_score: f64,
    pub sub_scores: SubScores,
    pub reasoning: ScoreReasoning,
}

/// Runner-up entry persisted on the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlternativeSuggestion {
    pub distributor_id: Uuid,
    pub distributor_name: String,
    pub confidence_score: f64,
    pub reasoning: ScoreReasoning,
}

/// Primary suggestion plus up to two ranked alternatives.
#[derive(Debug, Clone)]
pub struct RankedSuggestions {
    pub primary: ScoredCandidate,
    pub alternatives: Vec<AlternativeSuggestion>,
}

/// Inputs shared by every candidate being scored for one order.
pub struct ScoringContext<'a> {
    pub order: &'a order::Model,
    pub store: &'a store::Model,
    pub requirements: &'a OrderRequirements,
}

/// Multi-criterion weighted scoring of distributor candidates.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score every candidate and rank them. Ties keep the pool's original
    /// order (stable sort), so equal-scored candidates stay deterministic.
    pub fn rank(
        &self,
        candidates: &[DistributorCandidate],
        ctx: &ScoringContext<'_>,
    ) -> Option<RankedSuggestions> {
        let mut scored: Vec<ScoredCandidate> = candidates
            .iter()
            .map(|candidate| self.score_candidate(candidate, ctx))
            .collect();

        scored.sort_by(|a, b| {
            b.confidence_score
                .partial_cmp(&a.confidence_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut iter = scored.into_iter();
        let primary = iter.next()?;
        let alternatives = iter
            .take(2)
            .map(|c| AlternativeSuggestion {
                distributor_id: c.distributor_id,
                distributor_name: c.distributor_name,
                confidence_score: c.confidence_score,
                reasoning: c.reasoning,
            })
            .collect();

        Some(RankedSuggestions {
            primary,
            alternatives,
        })
    }

    /// Compute the weighted confidence score for one candidate.
    /// Pure: same candidate and order fields always give the same score.
    pub fn score_candidate(
        &self,
        candidate: &DistributorCandidate,
        ctx: &ScoringContext<'_>,
    ) -> ScoredCandidate {
        let distributor = &candidate.distributor;
        let (location, distance_km) =
            location_score(candidate, ctx.store, &ctx.requirements.zone);
        let sub_scores = SubScores {
            location,
            availability: availability_score(
                candidate.trips_today,
                candidate.effective_capacity,
            ),
            performance: performance_score(
                distributor.performance_rating,
                candidate.success_rate,
            ),
            experience: experience_score(
                candidate.store_delivery_count,
                distributor.total_deliveries,
            ),
            capacity_fit: capacity_fit_score(
                ctx.order.total_amount.to_f64().unwrap_or(0.0),
                distributor.vehicle_capacity.to_f64().unwrap_or(0.0),
            ),
            priority_match: priority_match_score(
                ctx.order.priority,
                distributor.performance_rating,
            ),
        };

        let confidence_score = combine(&sub_scores, &self.weights);
        let zone_match = distributor.serves_zone(&ctx.requirements.zone)
            && distributor.delivery_zone.is_some();
        let reasoning = build_reasoning(
            zone_match,
            &sub_scores,
            distance_km,
            candidate.trips_today,
            ctx.requirements.complexity.level,
        );

        ScoredCandidate {
            distributor_id: distributor.id,
            distributor_name: distributor.name.clone(),
            confidence_score,
            sub_scores,
            reasoning,
        }
    }
}

/// Base 50; +30 for an exact zone match or an `all`-zone candidate; +20 for
/// the store's pre-assigned distributor; up to +15 by inverse-distance
/// banding when both coordinate pairs are known. Clamped to 100.
fn location_score(
    candidate: &DistributorCandidate,
    store: &store::Model,
    zone: &str,
) -> (f64, Option<f64>) {
    let distributor = &candidate.distributor;
    let mut score: f64 = 50.0;

    if let Some(candidate_zone) = distributor.delivery_zone.as_deref() {
        if candidate_zone.eq_ignore_ascii_case(zone)
            || candidate_zone.eq_ignore_ascii_case(crate::entities::distributor::ZONE_ALL)
        {
            score += 30.0;
        }
    }

    if store.assigned_distributor_id == Some(distributor.id) {
        score += 20.0;
    }

    let distance_km = match (
        store.latitude,
        store.longitude,
        distributor.latitude,
        distributor.longitude,
    ) {
        (Some(s_lat), Some(s_lon), Some(d_lat), Some(d_lon)) => {
            Some(haversine_km(s_lat, s_lon, d_lat, d_lon))
        }
        _ => None,
    };

    if let Some(km) = distance_km {
        if km < 5.0 {
            score += 15.0;
        } else if km < 10.0 {
            score += 10.0;
        } else if km < 20.0 {
            score += 5.0;
        }
    }

    (score.min(100.0), distance_km)
}

/// `100 × (1 − trips_today / capacity)`, floored at 0 at/over capacity.
fn availability_score(trips_today: i64, capacity: i32) -> f64 {
    if capacity <= 0 || trips_today >= capacity as i64 {
        return 0.0;
    }
    100.0 * (1.0 - trips_today as f64 / capacity as f64)
}

/// Weighted blend of the cumulative rating and the delivery success ratio.
fn performance_score(rating: f64, success_rate: f64) -> f64 {
    (0.6 * rating + 0.4 * success_rate * 100.0).clamp(0.0, 100.0)
}

/// Base 50; up to +30 scaled by completed visits to this store (capped at
/// ten visits); up to +20 by total-delivery tiers.
fn experience_score(store_visits: i64, total_deliveries: i64) -> f64 {
    let mut score = 50.0;

    let visits = store_visits.min(10) as f64;
    score += 30.0 * (visits / 10.0);

    score += if total_deliveries >= 100 {
        20.0
    } else if total_deliveries >= 50 {
        15.0
    } else if total_deliveries >= 20 {
        10.0
    } else if total_deliveries >= 5 {
        5.0
    } else {
        0.0
    };

    score.min(100.0)
}

/// 100 while the order sits well under the vehicle threshold, degrading
/// stepwise to 40 as it approaches or exceeds 80% of it.
fn capacity_fit_score(order_value: f64, vehicle_capacity: f64) -> f64 {
    if vehicle_capacity <= 0.0 {
        return 40.0;
    }
    let ratio = order_value / vehicle_capacity;
    if ratio <= 0.5 {
        100.0
    } else if ratio <= 0.65 {
        85.0
    } else if ratio <= 0.8 {
        70.0
    } else {
        40.0
    }
}

/// High-stakes orders prefer proven performers; everything else is neutral.
fn priority_match_score(priority: order::OrderPriority, rating: f64) -> f64 {
    match priority {
        order::OrderPriority::Urgent if rating > 90.0 => 100.0,
        order::OrderPriority::High if rating > 85.0 => 100.0,
        _ => 80.0,
    }
}

/// Weighted sum, rounded to two decimals and clamped to [0, 100].
fn combine(sub: &SubScores, w: &ScoringWeights) -> f64 {
    let total = sub.location * w.location
        + sub.availability * w.availability
        + sub.performance * w.performance
        + sub.experience * w.experience
        + sub.capacity_fit * w.capacity_fit
        + sub.priority_match * w.priority_match;
    round2(total).clamp(0.0, 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn build_reasoning(
    zone_match: bool,
    sub: &SubScores,
    distance_km: Option<f64>,
    trips_today: i64,
    complexity: ComplexityLevel,
) -> ScoreReasoning {
    let location = if sub.location > 80.0 {
        "optimal delivery location"
    } else if sub.location > 60.0 {
        "good location coverage"
    } else {
        "outside preferred delivery area"
    };

    let availability = if trips_today == 0 {
        "no trips scheduled for the day"
    } else if sub.availability > 60.0 {
        "ample remaining capacity"
    } else if sub.availability > 0.0 {
        "approaching daily trip limit"
    } else {
        "at daily trip limit"
    };

    let performance = if sub.performance > 90.0 {
        "top-rated delivery record"
    } else if sub.performance > 75.0 {
        "consistently reliable"
    } else {
        "average delivery record"
    };

    let experience = if sub.experience > 70.0 {
        "experienced with this store"
    } else if sub.experience > 55.0 {
        "seasoned on comparable routes"
    } else {
        "limited history with this store"
    };

    let capacity = if sub.capacity_fit >= 100.0 {
        "order well within vehicle capacity"
    } else if sub.capacity_fit >= 70.0 {
        "order fits vehicle capacity"
    } else {
        "order approaches vehicle capacity"
    };

    let mut highlights = Vec::new();
    if zone_match {
        highlights.push("serves the delivery zone".to_string());
    }
    if sub.location > 80.0 {
        highlights.push("optimal delivery location".to_string());
    }
    if sub.availability > 80.0 {
        highlights.push("wide-open schedule".to_string());
    }
    if sub.performance > 85.0 {
        highlights.push("strong performance history".to_string());
    }
    if sub.experience > 70.0 {
        highlights.push("knows this store well".to_string());
    }

    ScoreReasoning {
        zone_match,
        location: location.to_string(),
        availability: availability.to_string(),
        performance: performance.to_string(),
        experience: experience.to_string(),
        capacity: capacity.to_string(),
        distance_km: distance_km.map(round2),
        complexity,
        highlights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::distributor::{self, Availability, DistributorStatus};
    use crate::entities::order::{OrderPriority, OrderStatus};
    use crate::services::requirements::{OrderComplexity, OrderRequirements};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn distributor(name: &str, zone: Option<&str>, rating: f64) -> distributor::Model {
        distributor::Model {
            id: Uuid::new_v4(),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            status: DistributorStatus::Active,
            availability: Availability::Available,
            delivery_zone: zone.map(String::from),
            max_daily_capacity: 5,
            vehicle_capacity: dec!(2000),
            performance_rating: rating,
            total_deliveries: 60,
            successful_deliveries: 57,
            current_workload: 0,
            latitude: None,
            longitude: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn candidate(
        model: distributor::Model,
        trips_today: i64,
        store_visits: i64,
    ) -> DistributorCandidate {
        let success_rate = model.success_rate();
        let capacity = model.max_daily_capacity;
        DistributorCandidate {
            distributor: model,
            trips_today,
            effective_capacity: capacity,
            success_rate,
            workload_pct: 100.0 * trips_today as f64 / capacity as f64,
            store_delivery_count: store_visits,
        }
    }

    fn store_model() -> store::Model {
        store::Model {
            id: Uuid::new_v4(),
            name: "Central Bakery".into(),
            address: "1 Plaza Mayor, downtown".into(),
            city: None,
            delivery_zone: Some("downtown".into()),
            latitude: None,
            longitude: None,
            preferred_delivery_time: Some("07:30".into()),
            assigned_distributor_id: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn order_model(total: Decimal, priority: OrderPriority) -> order::Model {
        let now = Utc::now();
        order::Model {
            id: Uuid::new_v4(),
            order_number: "ORD-2001".into(),
            store_id: Uuid::new_v4(),
            status: OrderStatus::Confirmed,
            priority,
            total_amount: total,
            order_date: now,
            delivery_date: Some(now.date_naive() + chrono::Duration::days(3)),
            assigned_distributor_id: None,
            notes: None,
            created_at: now,
            updated_at: None,
            version: 1,
        }
    }

    fn requirements(zone: &str) -> OrderRequirements {
        OrderRequirements {
            zone: zone.into(),
            total_weight_kg: 12.0,
            requires_special_handling: false,
            complexity: OrderComplexity::default(),
        }
    }

    #[test]
    fn sub_scores_hit_documented_values() {
        assert!((availability_score(0, 5) - 100.0).abs() < 1e-9);
        assert!((availability_score(4, 5) - 20.0).abs() < 1e-9);
        assert_eq!(availability_score(5, 5), 0.0);
        assert_eq!(availability_score(7, 5), 0.0);

        // 0.6*90 + 0.4*95 = 92
        assert!((performance_score(90.0, 0.95) - 92.0).abs() < 1e-9);

        assert_eq!(capacity_fit_score(400.0, 2000.0), 100.0);
        assert_eq!(capacity_fit_score(1300.0, 2000.0), 85.0);
        assert_eq!(capacity_fit_score(1500.0, 2000.0), 70.0);
        assert_eq!(capacity_fit_score(1900.0, 2000.0), 40.0);

        assert_eq!(priority_match_score(OrderPriority::Urgent, 95.0), 100.0);
        assert_eq!(priority_match_score(OrderPriority::Urgent, 88.0), 80.0);
        assert_eq!(priority_match_score(OrderPriority::High, 86.0), 100.0);
        assert_eq!(priority_match_score(OrderPriority::Normal, 99.0), 80.0);
    }

    #[test]
    fn experience_scales_with_store_visits_and_tiers() {
        assert!((experience_score(0, 0) - 50.0).abs() < 1e-9);
        assert!((experience_score(10, 0) - 80.0).abs() < 1e-9);
        assert!((experience_score(25, 0) - 80.0).abs() < 1e-9);
        assert!((experience_score(0, 100) - 70.0).abs() < 1e-9);
        assert!((experience_score(5, 20) - 75.0).abs() < 1e-9);
        assert_eq!(experience_score(10, 100), 100.0);
    }

    #[test]
    fn zone_match_beats_loaded_schedule() {
        // Candidate A: zone match, rating 95, empty schedule.
        // Candidate B: no zone affiliation bonus, rating 95, 4/5 trips used.
        let store = store_model();
        let order = order_model(dec!(300), OrderPriority::Normal);
        let req = requirements("downtown");
        let ctx = ScoringContext {
            order: &order,
            store: &store,
            requirements: &req,
        };

        let a = candidate(distributor("Route A", Some("downtown"), 95.0), 0, 0);
        let b = candidate(distributor("Route B", Some("south"), 95.0), 4, 0);

        let engine = ScoringEngine::new();
        let ranked = engine.rank(&[b.clone(), a.clone()], &ctx).unwrap();

        let score_a = engine.score_candidate(&a, &ctx).confidence_score;
        let score_b = engine.score_candidate(&b, &ctx).confidence_score;
        assert!(score_a > score_b, "a={} b={}", score_a, score_b);
        assert_eq!(ranked.primary.distributor_name, "Route A");
        assert_eq!(ranked.alternatives.len(), 1);
    }

    #[test]
    fn scoring_is_deterministic() {
        let store = store_model();
        let order = order_model(dec!(450), OrderPriority::High);
        let req = requirements("downtown");
        let ctx = ScoringContext {
            order: &order,
            store: &store,
            requirements: &req,
        };
        let c = candidate(distributor("Route C", Some("all"), 88.0), 2, 3);

        let engine = ScoringEngine::new();
        let first = engine.score_candidate(&c, &ctx);
        let second = engine.score_candidate(&c, &ctx);
        assert_eq!(first.confidence_score, second.confidence_score);
        assert_eq!(first.reasoning, second.reasoning);
    }

    #[test]
    fn golden_confidence_value() {
        // location: 50 + 30 (zone) = 80
        // availability: 100 * (1 - 2/5) = 60
        // performance: 0.6*88 + 0.4*95 = 90.8
        // experience: 50 + 30*(3/10) + 15 (60 deliveries) = 74
        // capacity_fit: 450/2000 <= 0.5 -> 100
        // priority: high, 88 > 85 -> 100
        // weighted: 80*.25 + 60*.20 + 90.8*.20 + 74*.15 + 100*.15 + 100*.05
        //         = 20 + 12 + 18.16 + 11.1 + 15 + 5 = 81.26
        let store = store_model();
        let order = order_model(dec!(450), OrderPriority::High);
        let req = requirements("downtown");
        let ctx = ScoringContext {
            order: &order,
            store: &store,
            requirements: &req,
        };
        let c = candidate(distributor("Route D", Some("downtown"), 88.0), 2, 3);

        let scored = ScoringEngine::new().score_candidate(&c, &ctx);
        assert!((scored.confidence_score - 81.26).abs() < 1e-9);
    }

    #[test]
    fn ties_preserve_pool_order() {
        let store = store_model();
        let order = order_model(dec!(100), OrderPriority::Normal);
        let req = requirements("downtown");
        let ctx = ScoringContext {
            order: &order,
            store: &store,
            requirements: &req,
        };

        let first = candidate(distributor("First In Pool", Some("downtown"), 80.0), 1, 0);
        let mut twin = distributor("Second In Pool", Some("downtown"), 80.0);
        twin.total_deliveries = first.distributor.total_deliveries;
        twin.successful_deliveries = first.distributor.successful_deliveries;
        let second = candidate(twin, 1, 0);

        let ranked = ScoringEngine::new()
            .rank(&[first, second], &ctx)
            .unwrap();
        assert_eq!(ranked.primary.distributor_name, "First In Pool");
    }

    #[test]
    fn reasoning_thresholds_are_reproducible() {
        let sub = SubScores {
            location: 95.0,
            availability: 100.0,
            performance: 92.0,
            experience: 80.0,
            capacity_fit: 100.0,
            priority_match: 80.0,
        };
        let reasoning = build_reasoning(true, &sub, Some(3.2), 0, ComplexityLevel::Medium);
        assert_eq!(reasoning.location, "optimal delivery location");
        assert_eq!(reasoning.availability, "no trips scheduled for the day");
        assert!(reasoning.highlights.contains(&"serves the delivery zone".to_string()));
        assert_eq!(reasoning.distance_km, Some(3.2));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn confidence_always_within_bounds(
                rating in 0.0f64..100.0,
                trips in 0i64..10,
                visits in 0i64..200,
                total in 1u32..5000,
                deliveries in 0i64..500,
            ) {
                let store = store_model();
                let order = order_model(Decimal::from(total), OrderPriority::Normal);
                let req = requirements("downtown");
                let ctx = ScoringContext {
                    order: &order,
                    store: &store,
                    requirements: &req,
                };
                let mut model = distributor("Prop", Some("downtown"), rating);
                model.total_deliveries = deliveries;
                model.successful_deliveries = deliveries / 2;
                let c = candidate(model, trips, visits);

                let scored = ScoringEngine::new().score_candidate(&c, &ctx);
                prop_assert!(scored.confidence_score >= 0.0);
                prop_assert!(scored.confidence_score <= 100.0);
            }
        }
    }
}
