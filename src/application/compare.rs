use super::cost;
use crate::config::RankingPolicy;
use crate::domain::processor::{ProcessorRecord, ProcessorStatus};
use crate::domain::profile::MonthlyVolume;
use crate::domain::recommendation::CostComparison;
use crate::error::{MatchError, Result};

/// Maximum number of processors shown side by side.
pub const MAX_COMPARED: usize = 4;

/// Side-by-side cost comparison of selected active processors at one volume.
///
/// Entries follow the order of `ids`. Repeated ids appear once. Ids that are
/// unknown or not active are skipped with a warning.
pub fn compare(
    catalog: &[ProcessorRecord],
    ids: &[String],
    volume: MonthlyVolume,
    policy: &RankingPolicy,
) -> Result<Vec<CostComparison>> {
    let mut selected: Vec<&str> = Vec::with_capacity(ids.len());
    for id in ids {
        if !selected.contains(&id.as_str()) {
            selected.push(id.as_str());
        }
    }
    if selected.len() > MAX_COMPARED {
        return Err(MatchError::ValidationError(format!(
            "At most {} processors can be compared, got {}",
            MAX_COMPARED,
            selected.len()
        )));
    }

    let mut columns = Vec::with_capacity(selected.len());
    for id in selected {
        let Some(processor) = catalog
            .iter()
            .find(|p| p.id == id && p.status == ProcessorStatus::Active)
        else {
            tracing::warn!("processor {} is unknown or not active, skipping", id);
            continue;
        };

        let projection = cost::project(processor, volume, policy.average_transaction_size);
        columns.push(CostComparison {
            processor: processor.clone(),
            total_cost: projection.total_cost,
            effective_rate: projection.effective_rate,
        });
    }
    Ok(columns)
}
