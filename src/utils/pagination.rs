use serde::Serialize;

/// Page-number pagination for listing endpoints.
///
/// Pages are 1-based. The page size defaults to the configured fixed size and
/// is clamped to the configured upper bound, so a client can never request an
/// unbounded listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Pagination {
    pub fn clamped(
        page: Option<u32>,
        page_size: Option<u32>,
        default_size: u32,
        max_size: u32,
    ) -> Self {
        let page = page.unwrap_or(1).max(1);
        let page_size = page_size
            .unwrap_or(default_size)
            .clamp(1, max_size.max(1));
        Self { page, page_size }
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }
}

/// Listing envelope: total record count plus the requested page of results.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub count: i64,
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_with_fixed_size() {
        let p = Pagination::clamped(None, None, 3, 100);
        assert_eq!(p, Pagination { page: 1, page_size: 3 });
        assert_eq!(p.limit(), 3);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn page_size_is_clamped_to_upper_bound() {
        let p = Pagination::clamped(Some(2), Some(500), 3, 100);
        assert_eq!(p.page_size, 100);
        assert_eq!(p.offset(), 100);
    }

    #[test]
    fn zero_page_and_size_are_normalized() {
        let p = Pagination::clamped(Some(0), Some(0), 3, 100);
        assert_eq!(p, Pagination { page: 1, page_size: 1 });
    }
}
