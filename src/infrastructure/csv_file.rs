use crate::domain::ports::CatalogSource;
use crate::domain::processor::ProcessorRecord;
use crate::error::Result;
use crate::interfaces::csv::processor_reader::ProcessorReader;
use async_trait::async_trait;
use std::path::PathBuf;

/// Catalog stored as CSV, one processor per row.
///
/// Rows that fail to parse are logged and skipped; the rest of the file
/// still loads.
#[derive(Debug, Clone)]
pub struct CsvFileCatalog {
    path: PathBuf,
}

impl CsvFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for CsvFileCatalog {
    async fn load(&self) -> Result<Vec<ProcessorRecord>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let mut records = Vec::new();
        let reader = ProcessorReader::new(bytes.as_slice());
        for (index, row) in reader.processors().enumerate() {
            match row {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("skipping catalog row {}: {}", index + 1, e),
            }
        }
        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "loaded CSV catalog"
        );
        Ok(records)
    }
}
