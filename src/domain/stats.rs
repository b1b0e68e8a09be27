use serde::Serialize;

use crate::domain::types::CatalogCategory;

/// Overview counters shown on the dashboard landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub active: usize,
    pub draft: usize,
    pub archived: usize,
    /// Item count per category, in category declaration order.
    pub categories: Vec<CategoryCount>,
    /// Sum of prices across active items.
    pub total_revenue: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: CatalogCategory,
    pub count: usize,
}
