//! List Query Primitives
//!
//! Every list endpoint accepts the same loosely-typed query parameters
//! (`limit`, `page`, `sort`, `isActive`). Invalid values never fail the
//! request; they fall back to the defaults below.

use serde::{Deserialize, Serialize};

/// Default page size when `limit` is missing or not a positive integer
pub const DEFAULT_LIMIT: i64 = 99_999;

/// Default page number
pub const DEFAULT_PAGE: i64 = 1;

/// Pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub page: i64,
}

impl Page {
    /// Parse raw query values, falling back to the defaults.
    ///
    /// ```
    /// use kernel::query::Page;
    /// let p = Page::parse(Some("10"), Some("3"));
    /// assert_eq!(p.offset(), 20);
    /// let p = Page::parse(Some("-5"), Some("abc"));
    /// assert_eq!((p.limit, p.page), (99_999, 1));
    /// ```
    pub fn parse(limit: Option<&str>, page: Option<&str>) -> Self {
        Self {
            limit: positive(limit).unwrap_or(DEFAULT_LIMIT),
            page: positive(page).unwrap_or(DEFAULT_PAGE),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

fn positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
}

/// `ASC` / `DESC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than `ASC`/`DESC` (case-insensitive) is `ASC`
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub const fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// `isActive` filter on list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    Any,
    Active,
    Inactive,
}

impl ActiveFilter {
    /// `'1'` / `'0'`; any other value means no filter
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("1") => ActiveFilter::Active,
            Some("0") => ActiveFilter::Inactive,
            _ => ActiveFilter::Any,
        }
    }

    pub const fn as_option(&self) -> Option<bool> {
        match self {
            ActiveFilter::Any => None,
            ActiveFilter::Active => Some(true),
            ActiveFilter::Inactive => Some(false),
        }
    }
}

/// Parse an `isActive` form field.
///
/// Forms send `'1'`/`'0'`, JSON bodies may send `true`/`false`.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" => Some(true),
        "0" => Some(false),
        s if s.eq_ignore_ascii_case("true") => Some(true),
        s if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// Raw common list parameters as they arrive in the query string.
///
/// Resource query DTOs embed this with `#[serde(flatten)]` and add their
/// own filters next to it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub limit: Option<String>,
    pub page: Option<String>,
    pub sort: Option<String>,
    pub sort_by: Option<String>,
    pub is_active: Option<String>,
}

impl ListQuery {
    pub fn page(&self) -> Page {
        Page::parse(self.limit.as_deref(), self.page.as_deref())
    }

    pub fn sort(&self) -> SortOrder {
        SortOrder::parse(self.sort.as_deref())
    }

    pub fn active(&self) -> ActiveFilter {
        ActiveFilter::parse(self.is_active.as_deref())
    }

    /// Trimmed `sortBy`, `None` when blank
    pub fn sort_by(&self) -> Option<&str> {
        non_blank(self.sort_by.as_deref())
    }
}

/// `Some(trimmed)` unless the value is missing or whitespace
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// `%value%` for `ILIKE`, with `%`, `_` and `\\` escaped
pub fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// `params` of every list response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub total_active: i64,
    pub limit: i64,
}

impl<T> Listing<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        Listing {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            total_active: self.total_active,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults() {
        assert_eq!(Page::parse(None, None), Page::default());
        assert_eq!(Page::parse(Some("0"), Some("0")), Page::default());
        assert_eq!(Page::parse(Some("NaN"), Some("")), Page::default());
    }

    #[test]
    fn test_page_offset() {
        let page = Page::parse(Some("25"), Some("2"));
        assert_eq!(page.limit, 25);
        assert_eq!(page.offset(), 25);
        assert_eq!(Page::default().offset(), 0);
    }

    #[test]
    fn test_sort_order() {
        assert_eq!(SortOrder::parse(Some("DESC")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(Some("sideways")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(None).as_sql(), "ASC");
    }

    #[test]
    fn test_active_filter() {
        assert_eq!(ActiveFilter::parse(Some("1")).as_option(), Some(true));
        assert_eq!(ActiveFilter::parse(Some("0")).as_option(), Some(false));
        assert_eq!(ActiveFilter::parse(Some("yes")), ActiveFilter::Any);
        assert_eq!(ActiveFilter::parse(None).as_option(), None);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("2"), None);
    }

    #[test]
    fn test_list_query_fallbacks() {
        let query: ListQuery =
            serde_json::from_value(serde_json::json!({"limit": "x", "sort": "DESC", "sortBy": "  "}))
                .unwrap();
        assert_eq!(query.page(), Page::default());
        assert_eq!(query.sort(), SortOrder::Desc);
        assert_eq!(query.active(), ActiveFilter::Any);
        assert_eq!(query.sort_by(), None);
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("cake"), "%cake%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn test_listing_serializes_camel_case() {
        let listing = Listing {
            data: vec!["a"],
            total: 1,
            total_active: 0,
            limit: 10,
        };
        let json = serde_json::to_value(listing.map(str::to_uppercase)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"data": ["A"], "total": 1, "totalActive": 0, "limit": 10})
        );
    }
}
