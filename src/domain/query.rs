use serde::{Deserialize, Serialize};

use crate::domain::item::CatalogItem;
use crate::domain::types::{CatalogSort, CategoryFilter, StatusFilter};

/// Page requested when the URL does not name one.
pub const DEFAULT_PAGE: i64 = 1;
/// Items per page when the URL does not name a size.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Page sizes offered by the pagination controls.
pub const PAGE_SIZE_OPTIONS: [i64; 3] = [10, 20, 50];

/// Structured catalog request derived from URL state.
///
/// `page` and `page_size` are kept exactly as decoded; any clamping happens in
/// the query engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub status: StatusFilter,
    pub category: CategoryFilter,
    pub sort: CatalogSort,
    pub page: i64,
    pub page_size: i64,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            q: None,
            status: StatusFilter::All,
            category: CategoryFilter::All,
            sort: CatalogSort::Newest,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogQuery {
    pub fn search(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        self.q = if q.is_empty() { None } else { Some(q) };
        self
    }
    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }
    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }
    pub fn sort(mut self, sort: CatalogSort) -> Self {
        self.sort = sort;
        self
    }
    pub fn paginate(mut self, page: i64, page_size: i64) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

/// One page of a filtered, sorted catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    pub page: i64,
    pub page_size: i64,
    /// Number of records after filtering, before pagination.
    pub total: usize,
    pub total_pages: usize,
}

impl CatalogPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
