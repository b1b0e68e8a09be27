//! Query-string codec for catalog listings.
//!
//! Decoding never fails: unknown or malformed values silently fall back to
//! their defaults. Encoding emits only non-default fields, so the default
//! query maps to an empty string and `decode(encode(q)) == q` for every query
//! that decoding can produce.

use std::collections::HashMap;

use crate::domain::query::{CatalogQuery, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::domain::types::{CatalogSort, CategoryFilter, StatusFilter};

/// Path of the server-rendered catalog page.
pub const CATALOG_PAGE_PATH: &str = "/dashboard/catalog";
/// Path of the JSON catalog endpoint.
pub const CATALOG_API_PATH: &str = "/api/catalog";

/// Parameter that forces the JSON endpoint to fail.
pub const FAIL_PARAM: &str = "fail";

/// String-keyed multimap of raw query values, in arrival order per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues(HashMap<String, Vec<String>>);

impl QueryValues {
    /// Parse an `application/x-www-form-urlencoded` query string (without `?`).
    pub fn parse(query_string: &str) -> Self {
        match serde_urlencoded::from_str::<Vec<(String, String)>>(query_string) {
            Ok(pairs) => Self::from_pairs(pairs),
            Err(e) => {
                log::warn!("Ignoring undecodable query string '{query_string}': {e}");
                Self::default()
            }
        }
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            values.entry(key.into()).or_default().push(value.into());
        }
        Self(values)
    }

    /// First value for `key`; an empty first value counts as absent.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Whether the request asks for a simulated backend failure.
    pub fn wants_failure(&self) -> bool {
        self.first(FAIL_PARAM) == Some("1")
    }
}

/// Leading-integer parse: optional whitespace and sign, then decimal digits.
///
/// Trailing garbage is ignored (`"12abc"` is 12). Inputs without digits, or
/// whose digits overflow `i64`, yield `None`.
fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn decode_enum<'a, T>(values: &'a QueryValues, key: &str) -> T
where
    T: TryFrom<&'a str> + Default,
{
    values
        .first(key)
        .and_then(|value| T::try_from(value).ok())
        .unwrap_or_default()
}

impl From<&QueryValues> for CatalogQuery {
    fn from(values: &QueryValues) -> Self {
        Self {
            q: values.first("q").map(str::to_string),
            status: decode_enum::<StatusFilter>(values, "status"),
            category: decode_enum::<CategoryFilter>(values, "category"),
            sort: decode_enum::<CatalogSort>(values, "sort"),
            page: values
                .first("page")
                .and_then(parse_leading_int)
                .unwrap_or(DEFAULT_PAGE),
            page_size: values
                .first("pageSize")
                .and_then(parse_leading_int)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

impl CatalogQuery {
    /// Decode a raw query string (without the leading `?`).
    pub fn from_query_string(query_string: &str) -> Self {
        Self::from(&QueryValues::parse(query_string))
    }

    /// Canonical, minimal query string for this request.
    ///
    /// Fields appear in the order q, status, category, page, pageSize, sort.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            pairs.push(("q", q.to_string()));
        }
        if !self.status.is_all() {
            pairs.push(("status", self.status.as_str().to_string()));
        }
        if !self.category.is_all() {
            pairs.push(("category", self.category.as_str().to_string()));
        }
        if self.page != DEFAULT_PAGE {
            pairs.push(("page", self.page.to_string()));
        }
        if self.page_size != DEFAULT_PAGE_SIZE {
            pairs.push(("pageSize", self.page_size.to_string()));
        }
        if self.sort != CatalogSort::default() {
            pairs.push(("sort", self.sort.as_str().to_string()));
        }

        serde_urlencoded::to_string(&pairs).unwrap_or_else(|e| {
            log::error!("Failed to encode catalog query: {e}");
            String::new()
        })
    }
}

fn href(path: &str, query: &CatalogQuery) -> String {
    let query_string = query.to_query_string();
    if query_string.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query_string}")
    }
}

/// Link to the server-rendered catalog page for `query`.
pub fn catalog_href(query: &CatalogQuery) -> String {
    href(CATALOG_PAGE_PATH, query)
}

/// URL of the JSON endpoint serving `query`.
pub fn api_href(query: &CatalogQuery) -> String {
    href(CATALOG_API_PATH, query)
}
