use super::verticals::UNIVERSAL_TAG;
use crate::domain::processor::ProcessorRecord;
use crate::domain::profile::{BusinessProfile, PaymentEnvironment};

/// Why a processor was dropped. Useful for debug logs and tests; the engine
/// itself only cares whether the list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Status,
    Vertical,
    BelowMinimumVolume,
    AboveMaximumVolume,
    NoOnlineApi,
}

/// Runs every eligibility check in order and reports the first failure.
pub fn check(
    processor: &ProcessorRecord,
    profile: &BusinessProfile,
    compatible_types: &[String],
) -> Result<(), Rejection> {
    if !processor.status.is_candidate() {
        return Err(Rejection::Status);
    }
    if !matches_vertical(processor, compatible_types) {
        return Err(Rejection::Vertical);
    }

    let volume = profile.monthly_volume.value();
    if let Some(floor) = processor.volume_floor()
        && volume < floor
    {
        return Err(Rejection::BelowMinimumVolume);
    }
    if let Some(ceiling) = processor.volume_ceiling()
        && volume > ceiling
    {
        return Err(Rejection::AboveMaximumVolume);
    }

    if profile.payment_environment == PaymentEnvironment::OnlineOnly && !processor.api_available {
        return Err(Rejection::NoOnlineApi);
    }

    Ok(())
}

pub fn is_eligible(
    processor: &ProcessorRecord,
    profile: &BusinessProfile,
    compatible_types: &[String],
) -> bool {
    check(processor, profile, compatible_types).is_ok()
}

fn matches_vertical(processor: &ProcessorRecord, compatible_types: &[String]) -> bool {
    processor.business_types.is_empty()
        || processor
            .business_types
            .iter()
            .any(|tag| tag == UNIVERSAL_TAG || compatible_types.contains(tag))
}
