//! Normalization of `limit`/`offset` query arguments.
//!
//! Out-of-range values are clamped, never rejected.

/// Page size used when `limit` is absent or out of range.
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest page size a caller may request.
pub const MAX_LIMIT: i64 = 20;

/// An effective page: `limit` in `1..=MAX_LIMIT`, `offset >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: i64,
    offset: i64,
}

impl Page {
    pub fn normalize(limit: Option<i32>, offset: Option<i32>) -> Self {
        let limit = match limit.map(i64::from) {
            Some(l) if (1..=MAX_LIMIT).contains(&l) => l,
            _ => DEFAULT_LIMIT,
        };
        let offset = offset.map(i64::from).filter(|o| *o >= 0).unwrap_or(0);
        Self { limit, offset }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::normalize(None, None)
    }
}
