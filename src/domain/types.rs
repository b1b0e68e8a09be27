//! Strongly-typed value objects used by domain entities.
//!
//! Catalog records carry these wrappers instead of raw primitives so that
//! identifiers, text values and the closed enumerations are enforced at the
//! boundary.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// Catch-all for values outside of an enumerated set.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

non_empty_string_newtype!(ItemId, "Stable identifier of a catalog item.", "item id");
non_empty_string_newtype!(ItemTitle, "Catalog item display title.", "title");

impl ItemId {
    /// Builds the canonical `item-NNN` identifier for a 1-based position.
    pub fn from_position(position: usize) -> Self {
        Self(format!("item-{position:03}"))
    }
}

/// Reference to a display image. Deliberately not validated.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ThumbnailUrl(String);

impl ThumbnailUrl {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Non-negative price in whole currency units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ItemPrice(i64);

impl ItemPrice {
    /// Constructs a value that must be zero or greater.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("price"))
        }
    }

    /// Returns the raw `i64` value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for ItemPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for ItemPrice {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<i64> for ItemPrice {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

/// Generates `as_str`, `ALL`, `Display` and string conversions for a closed
/// set of unit variants.
macro_rules! string_enum {
    ($name:ident, $field:expr, { $($variant:ident => $text:expr),+ $(,)? }) => {
        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation used in URLs and JSON.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                match value {
                    $($text => Ok(Self::$variant),)+
                    other => Err(TypeConstraintError::InvalidValue(format!(
                        "{}: {other}",
                        $field
                    ))),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

/// Lifecycle status of a catalog item.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CatalogStatus {
    Active,
    Draft,
    Archived,
}

string_enum!(CatalogStatus, "status", {
    Active => "active",
    Draft => "draft",
    Archived => "archived",
});

/// Product family a catalog item belongs to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CatalogCategory {
    #[serde(rename = "UI Kits")]
    UiKits,
    #[serde(rename = "Templates")]
    Templates,
    #[serde(rename = "Landing Pages")]
    LandingPages,
    #[serde(rename = "E-commerce")]
    Ecommerce,
}

string_enum!(CatalogCategory, "category", {
    UiKits => "UI Kits",
    Templates => "Templates",
    LandingPages => "Landing Pages",
    Ecommerce => "E-commerce",
});

/// Ordering applied to a catalog listing.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CatalogSort {
    #[default]
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
}

string_enum!(CatalogSort, "sort", {
    Newest => "newest",
    Oldest => "oldest",
    PriceAsc => "priceAsc",
    PriceDesc => "priceDesc",
});

/// Either every value of `T` or exactly one of them.
///
/// Serialized as `"all"` or the wire name of the selected value, which is the
/// shape templates and URLs expect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self::All
    }
}

/// Wire name of the catch-all filter value.
pub const FILTER_ALL: &str = "all";

pub type StatusFilter = Filter<CatalogStatus>;
pub type CategoryFilter = Filter<CatalogCategory>;

impl<T: Copy + PartialEq> Filter<T> {
    /// Whether `value` passes this filter.
    pub fn admits(&self, value: T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => *expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => FILTER_ALL,
            Self::Only(status) => status.as_str(),
        }
    }
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => FILTER_ALL,
            Self::Only(category) => category.as_str(),
        }
    }
}

impl<'a, T> TryFrom<&'a str> for Filter<T>
where
    T: TryFrom<&'a str, Error = TypeConstraintError>,
{
    type Error = TypeConstraintError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        if value == FILTER_ALL {
            Ok(Self::All)
        } else {
            T::try_from(value).map(Self::Only)
        }
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_titles() {
        let value = ItemTitle::new("  Dark Theme  ").unwrap();
        assert_eq!(value.as_str(), "Dark Theme");
    }

    #[test]
    fn rejects_empty_titles() {
        assert_eq!(
            ItemTitle::new("   ").unwrap_err(),
            TypeConstraintError::EmptyString("title")
        );
    }

    #[test]
    fn pads_item_ids() {
        assert_eq!(ItemId::from_position(7), "item-007");
        assert_eq!(ItemId::from_position(100), "item-100");
    }

    #[test]
    fn item_price_allows_zero() {
        assert_eq!(ItemPrice::new(0).unwrap().get(), 0);
    }

    #[test]
    fn item_price_rejects_negative_numbers() {
        assert_eq!(
            ItemPrice::new(-1).unwrap_err(),
            TypeConstraintError::NegativeNumber("price")
        );
    }

    #[test]
    fn parses_enumerated_values_exactly() {
        assert_eq!(
            CatalogCategory::try_from("Landing Pages").unwrap(),
            CatalogCategory::LandingPages
        );
        assert!(CatalogCategory::try_from("landing pages").is_err());
        assert_eq!(
            CatalogSort::try_from("priceDesc").unwrap(),
            CatalogSort::PriceDesc
        );
        assert!(CatalogStatus::try_from("").is_err());
    }

    #[test]
    fn filters_accept_all_or_one_value() {
        let filter = StatusFilter::try_from("all").unwrap();
        assert!(filter.admits(CatalogStatus::Draft));

        let filter = StatusFilter::try_from("draft").unwrap();
        assert!(filter.admits(CatalogStatus::Draft));
        assert!(!filter.admits(CatalogStatus::Active));
    }

    #[test]
    fn serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_value(CatalogCategory::Ecommerce).unwrap(),
            serde_json::json!("E-commerce")
        );
        assert_eq!(
            serde_json::to_value(CatalogSort::PriceAsc).unwrap(),
            serde_json::json!("priceAsc")
        );
        assert_eq!(
            serde_json::to_value(CategoryFilter::All).unwrap(),
            serde_json::json!("all")
        );
    }
}
