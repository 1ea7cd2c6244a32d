use crate::domain::processor::ProcessorRecord;
use crate::domain::profile::BudgetPriority;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const COST_CEILING_SCORE: Decimal = dec!(1000);
pub const NO_MONTHLY_FEE_SCORE: Decimal = dec!(1000);
pub const MONTHLY_FEE_CEILING_SCORE: Decimal = dec!(500);
pub const FEATURE_POINTS: Decimal = dec!(100);
pub const API_POINTS: Decimal = dec!(200);
/// Weight of cost when the merchant said cost is secondary.
pub const SECONDARY_COST_WEIGHT: Decimal = dec!(0.1);

/// Familiarity score by brand for merchants who want an easy start.
pub const SETUP_FAMILIARITY: &[(&str, Decimal)] = &[
    ("Square", dec!(900)),
    ("Stripe", dec!(850)),
    ("PayPal", dec!(800)),
];
pub const SETUP_BASELINE: Decimal = dec!(750);

pub fn setup_familiarity(name: &str) -> Decimal {
    SETUP_FAMILIARITY
        .iter()
        .find(|(brand, _)| *brand == name)
        .map(|(_, score)| *score)
        .unwrap_or(SETUP_BASELINE)
}

/// Score before domain bonuses, chosen by what the merchant prioritised.
pub fn base_score(
    processor: &ProcessorRecord,
    priority: BudgetPriority,
    total_cost: Decimal,
) -> Decimal {
    match priority {
        BudgetPriority::LowestTotalCost => COST_CEILING_SCORE.saturating_sub(total_cost),
        BudgetPriority::NoMonthlyFees => {
            if processor.no_monthly_fee {
                NO_MONTHLY_FEE_SCORE
            } else {
                MONTHLY_FEE_CEILING_SCORE
                    .saturating_sub(total_cost)
                    .max(Decimal::ZERO)
            }
        }
        BudgetPriority::EasySetup => {
            setup_familiarity(&processor.name)
                .saturating_sub(SECONDARY_COST_WEIGHT * total_cost)
        }
        BudgetPriority::AdvancedFeatures => {
            let features = FEATURE_POINTS * Decimal::from(processor.features.len());
            let api = if processor.api_available {
                API_POINTS
            } else {
                Decimal::ZERO
            };
            (features + api).saturating_sub(SECONDARY_COST_WEIGHT * total_cost)
        }
    }
}
