use crate::domain::recommendation::{CostComparison, ScoredProcessor};
use crate::error::Result;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::io::Write;

/// Display precision for money, rates and scores.
const DISPLAY_DP: u32 = 2;

fn display(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

#[derive(Serialize)]
struct RecommendationRow<'a> {
    rank: usize,
    id: &'a str,
    name: &'a str,
    total_cost: Decimal,
    effective_rate: Decimal,
    priority_score: Decimal,
}

#[derive(Serialize)]
struct ComparisonRow<'a> {
    id: &'a str,
    name: &'a str,
    total_cost: Decimal,
    effective_rate: Decimal,
}

/// Writes engine output as CSV. The header is always written, even when
/// there is nothing to report.
pub struct RecommendationWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RecommendationWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    pub fn write_recommendations(&mut self, results: &[ScoredProcessor]) -> Result<()> {
        self.writer.write_record([
            "rank",
            "id",
            "name",
            "total_cost",
            "effective_rate",
            "priority_score",
        ])?;
        for (index, scored) in results.iter().enumerate() {
            self.writer.serialize(RecommendationRow {
                rank: index + 1,
                id: scored.id(),
                name: scored.name(),
                total_cost: display(scored.total_cost),
                effective_rate: display(scored.effective_rate),
                priority_score: display(scored.priority_score),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_comparison(&mut self, columns: &[CostComparison]) -> Result<()> {
        self.writer
            .write_record(["id", "name", "total_cost", "effective_rate"])?;
        for column in columns {
            self.writer.serialize(ComparisonRow {
                id: &column.processor.id,
                name: &column.processor.name,
                total_cost: display(column.total_cost),
                effective_rate: display(column.effective_rate),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
