use super::processor::ProcessorRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Supplies the current processor catalog, including `coming_soon` entries.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<ProcessorRecord>>;
}

pub type CatalogSourceBox = Box<dyn CatalogSource>;
