use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::item::CatalogItem;
use crate::domain::types::TypeConstraintError;

pub mod seeded;
#[cfg(test)]
pub mod test;

/// Errors surfaced by catalog storage backends.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing store could not serve the request.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Number of records in the generated catalog.
pub const DEFAULT_CATALOG_SIZE: usize = 100;

/// Read-only access to the full list of catalog records.
pub trait CatalogReader {
    /// All records in their original (generation) order.
    fn list_items(&self) -> RepositoryResult<&[CatalogItem]>;
}

/// Catalog generated once at startup and shared read-only between workers.
///
/// Cloning shares the same underlying records.
#[derive(Clone, Debug)]
pub struct InMemoryCatalog {
    items: Arc<Vec<CatalogItem>>,
}

impl InMemoryCatalog {
    /// Generate `count` records with timestamps relative to `anchor`.
    pub fn generate(count: usize, anchor: DateTime<Utc>) -> Result<Self, TypeConstraintError> {
        let items = seeded::generate_items(count, anchor)?;
        log::info!("Generated {} catalog items anchored at {anchor}", items.len());
        Ok(Self::from_items(items))
    }

    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CatalogReader for InMemoryCatalog {
    fn list_items(&self) -> RepositoryResult<&[CatalogItem]> {
        Ok(&self.items)
    }
}
