use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OffsetLimit {
    pub offset: u64,
    pub limit: u64,
}

impl Default for OffsetLimit {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 15,
        }
    }
}

impl OffsetLimit {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.limit == 0 || self.limit > 100 {
            return Err("limit must be between 1 and 100".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub offset: u64,
    pub limit: u64,
    pub count: u64,
}

/// Page metadata returned by the storefront listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct PageInfo {
    pub total: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub offset: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PageInfo {
    pub fn new(total: u64, offset: u64, per_page: u64) -> Self {
        let per_page = per_page.max(1);

        Self {
            total,
            per_page,
            current_page: offset / per_page + 1,
            total_pages: total.div_ceil(per_page),
            offset,
            has_next_page: offset.saturating_add(per_page) < total,
            has_previous_page: offset > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info_first_page() {
        let page = PageInfo::new(20, 0, 8);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next_page);
        assert!(!page.has_previous_page);
    }

    #[test]
    fn test_page_info_last_page() {
        let page = PageInfo::new(20, 16, 8);
        assert_eq!(page.current_page, 3);
        assert!(!page.has_next_page);
        assert!(page.has_previous_page);
    }

    #[test]
    fn test_page_info_empty() {
        let page = PageInfo::new(0, 0, 8);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_page_info_offset_at_the_end_of_the_range() {
        let page = PageInfo::new(20, u64::MAX, 8);
        assert!(!page.has_next_page);
        assert!(page.has_previous_page);
    }

    #[test]
    fn test_offset_limit_validation() {
        assert!(OffsetLimit::new(0, 15).validate().is_ok());
        assert!(OffsetLimit::new(0, 0).validate().is_err());
        assert!(OffsetLimit::new(0, 101).validate().is_err());
    }
}
