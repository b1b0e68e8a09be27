use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::item::CatalogItem;
use crate::domain::types::{
    CatalogCategory, CatalogStatus, ItemId, ItemPrice, ItemTitle, ThumbnailUrl,
};
use crate::repository::{CatalogReader, RepositoryError, RepositoryResult};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    items: Vec<CatalogItem>,
    unavailable: bool,
}

impl TestRepository {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self {
            items,
            unavailable: false,
        }
    }

    /// A repository whose reads always fail.
    pub fn unavailable() -> Self {
        Self {
            items: vec![],
            unavailable: true,
        }
    }
}

impl CatalogReader for TestRepository {
    fn list_items(&self) -> RepositoryResult<&[CatalogItem]> {
        if self.unavailable {
            return Err(RepositoryError::Unavailable("test repository".into()));
        }
        Ok(&self.items)
    }
}

pub fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Hand-built record; `days_ago` is relative to [`anchor`].
pub fn sample_item(
    position: usize,
    title: &str,
    category: CatalogCategory,
    status: CatalogStatus,
    price: i64,
    days_ago: i64,
) -> CatalogItem {
    CatalogItem {
        id: ItemId::from_position(position),
        title: ItemTitle::new(title).unwrap(),
        category,
        status,
        price: ItemPrice::new(price).unwrap(),
        updated_at: anchor() - Duration::days(days_ago),
        thumbnail_url: ThumbnailUrl::new(format!("https://example.com/{position}.png")),
    }
}
