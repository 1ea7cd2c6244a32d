#![allow(dead_code)]

use procmatch::domain::processor::ProcessorRecord;
use procmatch::domain::profile::{
    BudgetPriority, BusinessProfile, MonthlyVolume, PaymentEnvironment,
};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const CATALOG_HEADER: [&str; 13] = [
    "id",
    "name",
    "primary_rate",
    "primary_fixed_fee",
    "monthly_fee",
    "business_types",
    "min_monthly_volume",
    "max_monthly_volume",
    "api_available",
    "no_monthly_fee",
    "featured",
    "features",
    "status",
];

pub fn processor(
    id: &str,
    name: &str,
    rate: Decimal,
    fixed: Decimal,
    monthly: Decimal,
) -> ProcessorRecord {
    ProcessorRecord::new(id, name, rate, fixed, monthly)
}

pub fn profile(
    business_type: &str,
    volume: Decimal,
    environment: PaymentEnvironment,
    priority: BudgetPriority,
) -> BusinessProfile {
    BusinessProfile::new(
        business_type,
        MonthlyVolume::new(volume).expect("test volume must be non-negative"),
        environment,
        priority,
    )
}

fn opt(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn write_catalog_csv(path: &Path, records: &[ProcessorRecord]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(CATALOG_HEADER)?;

    for r in records {
        let status = match r.status {
            procmatch::domain::processor::ProcessorStatus::Active => "active",
            procmatch::domain::processor::ProcessorStatus::ComingSoon => "coming_soon",
            procmatch::domain::processor::ProcessorStatus::Inactive => "inactive",
        };
        wtr.write_record([
            r.id.clone(),
            r.name.clone(),
            r.primary_rate.to_string(),
            r.primary_fixed_fee.to_string(),
            r.monthly_fee.to_string(),
            r.business_types.join(";"),
            opt(r.min_monthly_volume),
            opt(r.max_monthly_volume),
            r.api_available.to_string(),
            r.no_monthly_fee.to_string(),
            r.featured.to_string(),
            r.features.join(";"),
            status.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
