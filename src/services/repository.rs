use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{FarmerForm, FarmerProfile, FormError, LandForm, LandPlot};

/// Errors that can occur with repository operations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Seed file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed parse error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid seed record: {0}")]
    InvalidRecord(#[from] FormError),
}

/// A record addressable by id
pub trait Record: Clone + Send + Sync + 'static {
    /// Kind of record, used in error messages
    const KIND: &'static str;

    fn id(&self) -> &str;
}

impl Record for FarmerProfile {
    const KIND: &'static str = "farmer";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for LandPlot {
    const KIND: &'static str = "land";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Storage for profiles and listings
///
/// Handlers only ever see this trait, so the in-memory store can be swapped
/// for a database without touching routing or matching.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// All records in insertion order
    async fn list(&self) -> Result<Vec<T>, RepositoryError>;

    async fn get(&self, id: &str) -> Result<T, RepositoryError>;

    /// Insert a record, replacing any record with the same id in place
    async fn put(&self, record: T) -> Result<(), RepositoryError>;

    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}

/// Repository backed by a vector behind a read/write lock
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<T, RepositoryError> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("{} {}", T::KIND, id)))
    }

    async fn put(&self, record: T) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|existing| existing.id() == record.id()) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Err(RepositoryError::NotFound(format!("{} {}", T::KIND, id)));
        }
        Ok(())
    }
}

/// Demo data loaded at startup
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub farmers: Vec<FarmerForm>,
    #[serde(default)]
    pub lands: Vec<LandForm>,
}

impl SeedData {
    /// Read seed forms from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Normalize every form, failing on the first invalid record
    pub fn normalize(self) -> Result<(Vec<FarmerProfile>, Vec<LandPlot>), RepositoryError> {
        let farmers = self
            .farmers
            .into_iter()
            .map(FarmerForm::normalize)
            .collect::<Result<Vec<_>, _>>()?;
        let lands = self
            .lands
            .into_iter()
            .map(LandForm::normalize)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((farmers, lands))
    }
}
