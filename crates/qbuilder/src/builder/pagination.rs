//! Page / limit handling and the `LIMIT offset, count` clause.

use crate::value::FieldValue;

/// Page used when a record carries no valid page.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when a record carries no valid limit.
pub const DEFAULT_LIMIT: i64 = 10;

/// Replace a zero page with [`DEFAULT_PAGE`] and a zero limit with [`DEFAULT_LIMIT`].
///
/// Negative values are returned unchanged.
pub fn validate_page_and_limit(page: i64, limit: i64) -> (i64, i64) {
    let page = if page == 0 { DEFAULT_PAGE } else { page };
    let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
    (page, limit)
}

/// Read a positive integer from a page/limit field, falling back to `default`.
pub(crate) fn positive_int(value: &FieldValue, default: i64) -> i64 {
    let n = match value {
        FieldValue::Scalar(v) => v.as_i64(),
        FieldValue::Nullable(Some(v)) => v.as_i64(),
        _ => None,
    };

    match n {
        Some(n) if n > 0 => n,
        _ => default,
    }
}

/// Resolved pagination of one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    /// Rows fetched past `limit` to detect a next page (0 or 1).
    pub extra: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            extra: 0,
        }
    }
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// `" LIMIT {offset}, {offset + limit + extra}"`
    pub fn to_sql(&self) -> String {
        let offset = self.offset();
        let upper = offset.saturating_add(self.limit).saturating_add(self.extra);
        format!(" LIMIT {offset}, {upper}")
    }
}
