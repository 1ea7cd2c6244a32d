use crate::domain::ports::CatalogSource;
use crate::domain::processor::ProcessorRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Catalog stored as a JSON array of processor records.
///
/// The file is read on every load; a malformed file fails the whole load.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<ProcessorRecord>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let records: Vec<ProcessorRecord> = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "loaded JSON catalog"
        );
        Ok(records)
    }
}
