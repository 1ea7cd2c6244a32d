use super::processor::ProcessorRecord;
use rust_decimal::Decimal;
use serde::Serialize;

/// Projected monthly cost of running a given volume through one processor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostProjection {
    pub transaction_count: Decimal,
    pub transaction_fees: Decimal,
    pub total_cost: Decimal,
    /// Total cost as a percentage of volume.
    pub effective_rate: Decimal,
}

/// A processor that survived eligibility, with its derived ranking fields.
///
/// Built fresh on every scoring pass; the catalog record it wraps is a copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProcessor {
    #[serde(flatten)]
    pub processor: ProcessorRecord,
    pub total_cost: Decimal,
    pub effective_rate: Decimal,
    pub priority_score: Decimal,
}

impl ScoredProcessor {
    pub fn id(&self) -> &str {
        &self.processor.id
    }

    pub fn name(&self) -> &str {
        &self.processor.name
    }
}

/// One column of a side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostComparison {
    #[serde(flatten)]
    pub processor: ProcessorRecord,
    pub total_cost: Decimal,
    pub effective_rate: Decimal,
}
