//! Catalog query engine: filter, sort and paginate the in-memory store.

use std::cmp::Ordering;
use std::ops::Range;

use crate::domain::item::CatalogItem;
use crate::domain::query::{CatalogPage, CatalogQuery};
use crate::domain::types::CatalogSort;
use crate::forms::catalog::QueryValues;
use crate::repository::CatalogReader;

use super::{ServiceError, ServiceResult};

/// Run `query` against `records`.
///
/// The pipeline is search → status → category → stable sort → paginate and
/// cannot fail. A `page_size` below 1 is treated as 1; a `page` below 1 or
/// past the last page yields no items while `total` and `total_pages` still
/// describe the whole filtered set.
pub fn evaluate(records: &[CatalogItem], query: &CatalogQuery) -> CatalogPage {
    let needle = query
        .q
        .as_deref()
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    let mut filtered: Vec<&CatalogItem> = records
        .iter()
        .filter(|item| needle.as_deref().is_none_or(|n| item.matches_search(n)))
        .filter(|item| query.status.admits(item.status))
        .filter(|item| query.category.admits(item.category))
        .collect();

    filtered.sort_by(|a, b| compare(a, b, query.sort));

    let page_size = query.page_size.max(1);
    let total = filtered.len();
    let total_pages = total.div_ceil(page_size as usize);
    let items = page_window(total, query.page, page_size)
        .map(|window| filtered[window].iter().map(|item| (*item).clone()).collect())
        .unwrap_or_default();

    CatalogPage {
        items,
        page: query.page,
        page_size,
        total,
        total_pages,
    }
}

fn compare(a: &CatalogItem, b: &CatalogItem, sort: CatalogSort) -> Ordering {
    match sort {
        CatalogSort::Newest => b.updated_at.cmp(&a.updated_at),
        CatalogSort::Oldest => a.updated_at.cmp(&b.updated_at),
        CatalogSort::PriceAsc => a.price.cmp(&b.price),
        CatalogSort::PriceDesc => b.price.cmp(&a.price),
    }
}

/// Index range of the requested page within `total` sorted records.
fn page_window(total: usize, page: i64, page_size: i64) -> Option<Range<usize>> {
    if page < 1 {
        return None;
    }
    let start = usize::try_from((page - 1).checked_mul(page_size)?).ok()?;
    if start >= total {
        return None;
    }
    let end = start.saturating_add(page_size as usize).min(total);
    Some(start..end)
}

/// Core business logic for the catalog page.
///
/// Repository errors are logged and reported as [`ServiceError::Internal`].
pub fn list_catalog<R>(query: &CatalogQuery, repo: &R) -> ServiceResult<CatalogPage>
where
    R: CatalogReader,
{
    match repo.list_items() {
        Ok(records) => Ok(evaluate(records, query)),
        Err(e) => {
            log::error!("Failed to list catalog items: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for the `/api/catalog` endpoint.
///
/// Honors the `fail=1` test hook before looking at any other parameter.
pub fn api_catalog<R>(values: &QueryValues, repo: &R) -> ServiceResult<CatalogPage>
where
    R: CatalogReader,
{
    if values.wants_failure() {
        log::info!("Simulating catalog failure on request");
        return Err(ServiceError::Simulated);
    }

    list_catalog(&CatalogQuery::from(values), repo)
}
