use crate::domain::item::CatalogItem;
use crate::domain::stats::{CategoryCount, DashboardStats};
use crate::domain::types::{CatalogCategory, CatalogStatus};
use crate::repository::CatalogReader;

use super::{ServiceError, ServiceResult};

fn summarize(records: &[CatalogItem]) -> DashboardStats {
    let with_status = |status| records.iter().filter(|i| i.status == status).count();

    let categories = CatalogCategory::ALL
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: records.iter().filter(|i| i.category == category).count(),
        })
        .collect();

    let total_revenue = records
        .iter()
        .filter(|i| i.status == CatalogStatus::Active)
        .map(|i| i.price.get())
        .sum();

    DashboardStats {
        total: records.len(),
        active: with_status(CatalogStatus::Active),
        draft: with_status(CatalogStatus::Draft),
        archived: with_status(CatalogStatus::Archived),
        categories,
        total_revenue,
    }
}

/// Core business logic for the dashboard overview page.
pub fn dashboard_stats<R>(repo: &R) -> ServiceResult<DashboardStats>
where
    R: CatalogReader,
{
    match repo.list_items() {
        Ok(records) => Ok(summarize(records)),
        Err(e) => {
            log::error!("Failed to compute dashboard stats: {e}");
            Err(ServiceError::Internal)
        }
    }
}
