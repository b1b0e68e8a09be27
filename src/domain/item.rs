use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::types::{
    CatalogCategory, CatalogStatus, ItemId, ItemPrice, ItemTitle, ThumbnailUrl,
};

/// A single listable catalog record.
///
/// Records are generated once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: ItemTitle,
    pub category: CatalogCategory,
    pub status: CatalogStatus,
    pub price: ItemPrice,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub updated_at: DateTime<Utc>,
    pub thumbnail_url: ThumbnailUrl,
}

impl CatalogItem {
    /// Case-insensitive substring match against title or category label.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
    }
}

/// `2025-01-02T03:04:05.000Z`, the format browsers produce for `toISOString`.
fn serialize_iso_millis<S: Serializer>(
    value: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
