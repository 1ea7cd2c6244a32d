use crate::domain::processor::{ProcessorRecord, ProcessorStatus, RawProcessor};
use crate::error::{MatchError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// Separator for list-valued columns (`business_types`, `features`).
pub const LIST_SEPARATOR: char = ';';

/// One CSV row. List columns arrive as `;`-separated text.
#[derive(Debug, Deserialize)]
struct ProcessorRow {
    id: String,
    name: String,
    primary_rate: Decimal,
    primary_fixed_fee: Option<Decimal>,
    monthly_fee: Option<Decimal>,
    business_types: Option<String>,
    min_monthly_volume: Option<Decimal>,
    max_monthly_volume: Option<Decimal>,
    api_available: Option<bool>,
    no_monthly_fee: Option<bool>,
    featured: Option<bool>,
    features: Option<String>,
    status: ProcessorStatus,
}

fn split_list(raw: Option<String>) -> Option<Vec<String>> {
    let items: Vec<String> = raw?
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    Some(items)
}

impl From<ProcessorRow> for ProcessorRecord {
    fn from(row: ProcessorRow) -> Self {
        RawProcessor {
            id: row.id,
            name: row.name,
            primary_rate: row.primary_rate,
            primary_fixed_fee: row.primary_fixed_fee.unwrap_or_default(),
            monthly_fee: row.monthly_fee.unwrap_or_default(),
            business_types: split_list(row.business_types),
            min_monthly_volume: row.min_monthly_volume,
            max_monthly_volume: row.max_monthly_volume,
            api_available: row.api_available.unwrap_or(false),
            no_monthly_fee: row.no_monthly_fee,
            featured: row.featured.unwrap_or(false),
            features: split_list(row.features),
            status: row.status,
        }
        .into()
    }
}

/// Reads processor records from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and yields one `Result` per
/// row, so a bad row can be reported without losing the rest of the file.
pub struct ProcessorReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ProcessorReader<R> {
    /// Creates a new `ProcessorReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes processor rows.
    pub fn processors(self) -> impl Iterator<Item = Result<ProcessorRecord>> {
        self.reader
            .into_deserialize::<ProcessorRow>()
            .map(|result| result.map(ProcessorRecord::from).map_err(MatchError::from))
    }
}
