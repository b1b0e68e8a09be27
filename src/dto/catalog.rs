use serde::Serialize;

use crate::controls::PageSummary;
use crate::domain::item::CatalogItem;
use crate::domain::query::{CatalogPage, CatalogQuery, PAGE_SIZE_OPTIONS};
use crate::domain::types::{
    CatalogCategory, CatalogSort, CatalogStatus, CategoryFilter, FILTER_ALL, StatusFilter,
};
use crate::forms::catalog::catalog_href;

/// Catalog record prepared for table and grid rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItemDto {
    pub id: String,
    pub title: String,
    pub category: &'static str,
    pub status: &'static str,
    pub price: i64,
    /// `Jun 1, 2025`
    pub updated: String,
    pub thumbnail_url: String,
}

impl From<&CatalogItem> for CatalogItemDto {
    fn from(value: &CatalogItem) -> Self {
        Self {
            id: value.id.as_str().to_string(),
            title: value.title.as_str().to_string(),
            category: value.category.as_str(),
            status: value.status.as_str(),
            price: value.price.get(),
            updated: value.updated_at.format("%b %-d, %Y").to_string(),
            thumbnail_url: value.thumbnail_url.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOptionDto {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOptionDto {
    fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected,
        }
    }
}

pub fn status_options(selected: StatusFilter) -> Vec<SelectOptionDto> {
    let mut options = vec![SelectOptionDto::new(
        FILTER_ALL,
        "All Status",
        selected.is_all(),
    )];
    options.extend(CatalogStatus::ALL.iter().map(|&status| {
        let label = match status {
            CatalogStatus::Active => "Active",
            CatalogStatus::Draft => "Draft",
            CatalogStatus::Archived => "Archived",
        };
        SelectOptionDto::new(status.as_str(), label, selected == StatusFilter::Only(status))
    }));
    options
}

pub fn category_options(selected: CategoryFilter) -> Vec<SelectOptionDto> {
    let mut options = vec![SelectOptionDto::new(
        FILTER_ALL,
        "All Categories",
        selected.is_all(),
    )];
    options.extend(CatalogCategory::ALL.iter().map(|&category| {
        SelectOptionDto::new(
            category.as_str(),
            category.as_str(),
            selected == CategoryFilter::Only(category),
        )
    }));
    options
}

pub fn sort_options(selected: CatalogSort) -> Vec<SelectOptionDto> {
    CatalogSort::ALL
        .iter()
        .map(|&sort| {
            let label = match sort {
                CatalogSort::Newest => "Newest First",
                CatalogSort::Oldest => "Oldest First",
                CatalogSort::PriceAsc => "Price: Low to High",
                CatalogSort::PriceDesc => "Price: High to Low",
            };
            SelectOptionDto::new(sort.as_str(), label, sort == selected)
        })
        .collect()
}

pub fn page_size_options(selected: i64) -> Vec<SelectOptionDto> {
    PAGE_SIZE_OPTIONS
        .iter()
        .map(|&size| SelectOptionDto::new(size.to_string(), format!("{size} per page"), size == selected))
        .collect()
}

/// Pager footer: "Showing X to Y of Z" plus links to neighbouring pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagerDto {
    pub start: i64,
    pub end: i64,
    pub total: usize,
    pub page: i64,
    pub total_pages: usize,
    pub previous_page: Option<i64>,
    pub next_page: Option<i64>,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
}

impl PagerDto {
    pub fn new(query: &CatalogQuery, page: &CatalogPage) -> Self {
        let summary = PageSummary::of(page);
        let last_page = i64::try_from(page.total_pages).unwrap_or(i64::MAX).max(1);
        // Past the end, "previous" jumps back to the last real page.
        let previous_page = summary
            .has_previous
            .then(|| page.page.saturating_sub(1).min(last_page));
        let next_page = summary.has_next.then(|| page.page.saturating_add(1));
        let link = |target: i64| catalog_href(&query.clone().paginate(target, query.page_size));
        Self {
            start: summary.start,
            end: summary.end,
            total: summary.total,
            page: page.page,
            total_pages: page.total_pages,
            previous_page,
            next_page,
            previous_href: previous_page.map(link),
            next_href: next_page.map(link),
        }
    }
}

/// Everything the catalog template needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogViewDto {
    pub search: String,
    pub items: Vec<CatalogItemDto>,
    pub pager: PagerDto,
    pub status_options: Vec<SelectOptionDto>,
    pub category_options: Vec<SelectOptionDto>,
    pub sort_options: Vec<SelectOptionDto>,
    pub page_size_options: Vec<SelectOptionDto>,
}

impl CatalogViewDto {
    pub fn new(query: &CatalogQuery, page: &CatalogPage) -> Self {
        Self {
            search: query.q.clone().unwrap_or_default(),
            items: page.items.iter().map(CatalogItemDto::from).collect(),
            pager: PagerDto::new(query, page),
            status_options: status_options(query.status),
            category_options: category_options(query.category),
            sort_options: sort_options(query.sort),
            page_size_options: page_size_options(page.page_size),
        }
    }
}
