use serde::Serialize;

use crate::domain::query::CatalogQuery;
use crate::domain::types::{CatalogSort, CatalogStatus, StatusFilter};
use crate::forms::catalog::catalog_href;

/// Shortcut button on the dashboard overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickActionDto {
    pub label: &'static str,
    pub href: String,
}

pub fn quick_actions() -> Vec<QuickActionDto> {
    let base = CatalogQuery::default();
    vec![
        QuickActionDto {
            label: "View Active Items",
            href: catalog_href(&base.clone().status(StatusFilter::Only(CatalogStatus::Active))),
        },
        QuickActionDto {
            label: "View Draft Items",
            href: catalog_href(&base.clone().status(StatusFilter::Only(CatalogStatus::Draft))),
        },
        QuickActionDto {
            label: "Browse by Price (Low to High)",
            href: catalog_href(&base.sort(CatalogSort::PriceAsc)),
        },
    ]
}
