use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Failed to fetch countries, please try again later")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Offset pagination parameters (`_page`, `_limit`).
///
/// Values are kept as raw strings and parsed leniently: a numeric prefix is
/// honoured (`"3abc"` is page 3), anything else falls back to the default.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(rename = "_page")]
    #[param(value_type = Option<i64>, example = 1)]
    pub page: Option<String>,

    /// Number of items per page (default: 20)
    #[serde(rename = "_limit")]
    #[param(value_type = Option<i64>, example = 20)]
    pub limit: Option<String>,
}

impl PaginationQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: Some(page.to_string()),
            limit: Some(limit.to_string()),
        }
    }

    /// 1-based page number
    pub fn page(&self) -> usize {
        positive_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    pub fn limit(&self) -> usize {
        positive_or(self.limit.as_deref(), DEFAULT_PAGE_SIZE)
    }

    pub fn offset(&self) -> usize {
        (self.page() - 1).saturating_mul(self.limit())
    }

    /// Slice `items` down to the requested page; past the end yields an empty page
    pub fn paginate<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.limit())
            .collect()
    }
}

fn positive_or(raw: Option<&str>, default: usize) -> usize {
    match raw.and_then(parse_int_prefix) {
        Some(value) if value >= 1 => usize::try_from(value).unwrap_or(usize::MAX),
        _ => default,
    }
}

/// Parse the leading integer of `raw`: optional whitespace, optional sign,
/// then decimal digits up to the first non-digit. Saturates instead of overflowing.
fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut seen_digit = false;
    let mut value: i64 = 0;
    for digit in digits.chars().map_while(|c| c.to_digit(10)) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
