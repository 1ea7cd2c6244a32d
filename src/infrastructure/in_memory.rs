use crate::domain::ports::CatalogSource;
use crate::domain::processor::ProcessorRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory processor catalog.
///
/// Clones share the same records, so one handle can edit the catalog while
/// another serves recommendations.
#[derive(Default, Clone)]
pub struct InMemoryCatalog {
    records: Arc<RwLock<Vec<ProcessorRecord>>>,
}

impl InMemoryCatalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ProcessorRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Inserts a record, replacing any existing record with the same id.
    pub async fn insert(&self, record: ProcessorRecord) {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    /// Removes a record by id. Returns whether anything was removed.
    pub async fn remove(&self, id: &str) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        records.len() != before
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn load(&self) -> Result<Vec<ProcessorRecord>> {
        let records = self.records.read().await;
        Ok(records.clone())
    }
}
