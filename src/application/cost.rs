use crate::domain::processor::ProcessorRecord;
use crate::domain::profile::MonthlyVolume;
use crate::domain::recommendation::CostProjection;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Projects one month of fees for `volume` through `processor`.
///
/// `average_transaction_size` must be positive; `RankingPolicy` guarantees it.
/// At zero volume the effective rate is the nominal `primary_rate`.
/// Amounts beyond the `Decimal` range saturate instead of overflowing.
pub fn project(
    processor: &ProcessorRecord,
    volume: MonthlyVolume,
    average_transaction_size: Decimal,
) -> CostProjection {
    let volume = volume.value();
    let transaction_count = volume
        .checked_div(average_transaction_size)
        .unwrap_or(Decimal::MAX);
    let transaction_fees = (volume.saturating_mul(processor.primary_rate) / dec!(100))
        .saturating_add(transaction_count.saturating_mul(processor.primary_fixed_fee));
    let total_cost = transaction_fees.saturating_add(processor.monthly_fee);
    let effective_rate = if volume > Decimal::ZERO {
        total_cost
            .checked_div(volume)
            .and_then(|ratio| ratio.checked_mul(dec!(100)))
            .unwrap_or(Decimal::MAX)
    } else {
        processor.primary_rate
    };

    CostProjection {
        transaction_count,
        transaction_fees,
        total_cost,
        effective_rate,
    }
}
