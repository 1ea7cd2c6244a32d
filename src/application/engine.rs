use super::{bonus, cost, eligibility, scoring, verticals};
use crate::config::RankingPolicy;
use crate::domain::processor::ProcessorRecord;
use crate::domain::profile::BusinessProfile;
use crate::domain::recommendation::ScoredProcessor;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Recommends up to three processors for `profile`, best first, using the
/// default ranking policy.
///
/// An empty result means nothing in the catalog fits. That is a normal
/// outcome, not an error.
pub fn recommend(profile: &BusinessProfile, catalog: &[ProcessorRecord]) -> Vec<ScoredProcessor> {
    recommend_with(profile, catalog, &RankingPolicy::default())
}

pub fn recommend_with(
    profile: &BusinessProfile,
    catalog: &[ProcessorRecord],
    policy: &RankingPolicy,
) -> Vec<ScoredProcessor> {
    let compatible = verticals::compatible_types(&profile.business_type);

    let scored: Vec<ScoredProcessor> = catalog
        .iter()
        .filter(|processor| match eligibility::check(processor, profile, &compatible) {
            Ok(()) => true,
            Err(reason) => {
                tracing::trace!(processor = %processor.id, ?reason, "not eligible");
                false
            }
        })
        .map(|processor| score(processor, profile, policy))
        .collect();

    let eligible = scored.len();
    let mut ranked = rank(scored, policy.near_tie_window);
    ranked.truncate(policy.max_results);

    tracing::debug!(
        business_type = %profile.business_type,
        catalog = catalog.len(),
        eligible,
        returned = ranked.len(),
        "recommendation pass complete"
    );
    ranked
}

/// Attaches cost and priority fields to a copy of `processor`.
pub fn score(
    processor: &ProcessorRecord,
    profile: &BusinessProfile,
    policy: &RankingPolicy,
) -> ScoredProcessor {
    let projection = cost::project(
        processor,
        profile.monthly_volume,
        policy.average_transaction_size,
    );
    let priority_score =
        scoring::base_score(processor, profile.budget_priority, projection.total_cost)
            .saturating_add(bonus::total_bonus(profile, processor));

    ScoredProcessor {
        processor: processor.clone(),
        total_cost: projection.total_cost,
        effective_rate: projection.effective_rate,
        priority_score,
    }
}

/// Near-tie comparison: scores within `window` of each other are ordered by
/// cheaper total cost, otherwise by higher score.
pub fn near_tie_order(a: &ScoredProcessor, b: &ScoredProcessor, window: Decimal) -> Ordering {
    if a.priority_score.saturating_sub(b.priority_score).abs() < window {
        a.total_cost.cmp(&b.total_cost)
    } else {
        b.priority_score.cmp(&a.priority_score)
    }
}

/// Orders candidates best first.
///
/// `near_tie_order` is not transitive, so it cannot drive `sort_by` directly.
/// Candidates are first put in a strict total order, then a stable insertion
/// pass applies the near-tie rule. The outcome does not depend on the order
/// of the input catalog.
pub fn rank(mut candidates: Vec<ScoredProcessor>, window: Decimal) -> Vec<ScoredProcessor> {
    candidates.sort_by(|a, b| {
        b.priority_score
            .cmp(&a.priority_score)
            .then_with(|| a.total_cost.cmp(&b.total_cost))
            .then_with(|| a.processor.id.cmp(&b.processor.id))
    });

    let mut ranked: Vec<ScoredProcessor> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let mut at = ranked.len();
        while at > 0 && near_tie_order(&candidate, &ranked[at - 1], window) == Ordering::Less {
            at -= 1;
        }
        ranked.insert(at, candidate);
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::processor::ProcessorStatus;
    use crate::domain::profile::{
        BudgetPriority, MAX_MONTHLY_VOLUME, MonthlyVolume, PaymentEnvironment,
    };
    use rust_decimal_macros::dec;

    fn scored(id: &str, priority_score: Decimal, total_cost: Decimal) -> ScoredProcessor {
        ScoredProcessor {
            processor: ProcessorRecord::new(id, id, dec!(2.9), dec!(0.30), dec!(0)),
            total_cost,
            effective_rate: dec!(0),
            priority_score,
        }
    }

    fn ids(ranked: &[ScoredProcessor]) -> Vec<&str> {
        ranked.iter().map(|s| s.id()).collect()
    }

    fn profile(business_type: &str, volume: Decimal, priority: BudgetPriority) -> BusinessProfile {
        BusinessProfile::new(
            business_type,
            MonthlyVolume::new(volume).unwrap(),
            PaymentEnvironment::Both,
            priority,
        )
    }

    #[test]
    fn test_near_tie_prefers_cheaper() {
        let ranked = rank(
            vec![
                scored("a", dec!(505), dec!(40)),
                scored("b", dec!(500), dec!(30)),
            ],
            dec!(10),
        );
        assert_eq!(ids(&ranked), vec!["b", "a"]);
    }

    #[test]
    fn test_clear_gap_prefers_higher_score() {
        let ranked = rank(
            vec![
                scored("cheap", dec!(500), dec!(10)),
                scored("best", dec!(510), dec!(90)),
            ],
            dec!(10),
        );
        assert_eq!(ids(&ranked), vec!["best", "cheap"]);
    }

    #[test]
    fn test_rank_is_input_order_independent() {
        let a = scored("a", dec!(700), dec!(50));
        let b = scored("b", dec!(695), dec!(20));
        let c = scored("c", dec!(690), dec!(10));
        let d = scored("d", dec!(100), dec!(1));

        let forward = rank(vec![a.clone(), b.clone(), c.clone(), d.clone()], dec!(10));
        let backward = rank(vec![d, c, b, a], dec!(10));
        assert_eq!(ids(&forward), ids(&backward));
    }

    #[test]
    fn test_recommend_truncates_to_three() {
        let catalog: Vec<ProcessorRecord> = (0..6)
            .map(|i| {
                ProcessorRecord::new(
                    format!("p{i}"),
                    format!("P{i}"),
                    dec!(2.5) + Decimal::from(i),
                    dec!(0.10),
                    dec!(0),
                )
            })
            .collect();
        let retail = profile("retail", dec!(10000), BudgetPriority::LowestTotalCost);
        let result = recommend(&retail, &catalog);
        assert_eq!(ids(&result), vec!["p0", "p1", "p2"]);
    }

    #[test]
    fn test_recommend_scores_copy() {
        let stripe = ProcessorRecord::new("s", "Stripe", dec!(2.9), dec!(0.30), dec!(0));
        let catalog = vec![stripe];
        let retail = profile("retail", dec!(10000), BudgetPriority::LowestTotalCost);
        let result = recommend(&retail, &catalog);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].total_cost, dec!(350));
        assert_eq!(result[0].effective_rate, dec!(3.5));
        assert_eq!(result[0].priority_score, dec!(650));
        assert_eq!(result[0].processor, catalog[0]);
    }

    #[test]
    fn test_inactive_records_are_ignored() {
        let mut retired = ProcessorRecord::new("old", "Old", dec!(0.1), dec!(0), dec!(0));
        retired.status = ProcessorStatus::Inactive;
        let result = recommend(
            &profile("retail", dec!(10000), BudgetPriority::LowestTotalCost),
            &[retired],
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_partner_wins_for_restaurant() {
        let mut gpb = ProcessorRecord::new("gpb", "GoPayBright", dec!(2.4), dec!(0.15), dec!(0));
        gpb.business_types = vec!["retail".into(), "service".into(), "restaurant".into()];
        let mut toast = ProcessorRecord::new("toast", "Toast", dec!(2.49), dec!(0.15), dec!(0));
        toast.business_types = vec!["restaurant".into()];
        let stripe = ProcessorRecord::new("stripe", "Stripe", dec!(2.9), dec!(0.30), dec!(0));

        let result = recommend(
            &profile("restaurant", dec!(20000), BudgetPriority::LowestTotalCost),
            &[stripe, toast, gpb],
        );
        assert_eq!(ids(&result), vec!["gpb", "toast", "stripe"]);
    }

    #[test]
    fn test_custom_policy_limits_results() {
        let catalog = vec![
            ProcessorRecord::new("a", "A", dec!(2.0), dec!(0), dec!(0)),
            ProcessorRecord::new("b", "B", dec!(3.0), dec!(0), dec!(0)),
        ];
        let policy = RankingPolicy {
            max_results: 1,
            ..RankingPolicy::default()
        };
        let result = recommend_with(
            &profile("retail", dec!(1000), BudgetPriority::LowestTotalCost),
            &catalog,
            &policy,
        );
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_extreme_volumes_do_not_panic() {
        let catalog = vec![ProcessorRecord::new(
            "lightspeed",
            "Lightspeed",
            dec!(2.6),
            dec!(0.10),
            dec!(89),
        )];

        for raw in [
            "79228162514264337593543950335",
            "0.0000000000000000000000000001",
            "1000000000000000",
        ] {
            let profile = BusinessProfile::new(
                "retail",
                MonthlyVolume::parse_lenient(raw),
                PaymentEnvironment::Both,
                BudgetPriority::LowestTotalCost,
            );
            assert_eq!(ids(&recommend(&profile, &catalog)), vec!["lightspeed"]);
        }
    }

    #[test]
    fn test_saturated_cost_ranks_last() {
        let extreme =
            ProcessorRecord::new("extreme", "Extreme", Decimal::MAX, Decimal::MAX, dec!(0));
        let normal = ProcessorRecord::new("normal", "Normal", dec!(2.9), dec!(0.30), dec!(0));
        let result = recommend(
            &profile(
                "retail",
                MAX_MONTHLY_VOLUME,
                BudgetPriority::LowestTotalCost,
            ),
            &[extreme, normal],
        );
        assert_eq!(ids(&result), vec!["normal", "extreme"]);
        assert_eq!(result[1].total_cost, Decimal::MAX);
    }
}
