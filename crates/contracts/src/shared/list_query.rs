//! Client-side search, status filter and pagination for list pages.

use serde::{Deserialize, Serialize};

/// Active/inactive filter of list pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    /// Unknown values fall back to `All`.
    pub fn parse(value: &str) -> Self {
        match value {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    pub fn matches(&self, is_active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => is_active,
            StatusFilter::Inactive => !is_active,
        }
    }
}

/// Case-insensitive substring match over several fields.
///
/// A blank query matches everything.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&query))
}

/// Number of pages for `total_count` items; never less than one.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    if total_count == 0 {
        1
    } else {
        total_count.div_ceil(page_size)
    }
}

/// One page of a filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 0-based, already clamped to the last page.
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

/// Cut page `page` out of `items`, clamping `page` when the list shrank.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_pages(total_count, page_size);
    let page = page.min(total_pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total_count);
    Page {
        items: items.get(start..end).unwrap_or(&[]).to_vec(),
        page,
        page_size,
        total_count,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_paginate_middle_and_last_page() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(&items, 1, 10);
        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 3);

        let last = paginate(&items, 2, 10);
        assert_eq!(last.items, vec![21, 22, 23]);
    }

    #[test]
    fn test_paginate_clamps_after_filtering() {
        let items: Vec<u32> = (1..=4).collect();
        let page = paginate(&items, 7, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.items, vec![4]);

        let empty: Vec<u32> = Vec::new();
        let page = paginate(&empty, 3, 25);
        assert_eq!(page.page, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_matches_query() {
        let fields = ["Nguyễn Minh Quân", "0901234567", "12 Lý Thái Tổ, Phường Bến Nghé"];
        assert!(matches_query(&fields, ""));
        assert!(matches_query(&fields, "  "));
        assert!(matches_query(&fields, "minh"));
        assert!(matches_query(&fields, "BẾN NGHÉ"));
        assert!(matches_query(&fields, "0901"));
        assert!(!matches_query(&fields, "Đà Nẵng"));
    }

    #[test]
    fn test_status_filter() {
        assert!(StatusFilter::All.matches(false));
        assert!(StatusFilter::Active.matches(true));
        assert!(!StatusFilter::Active.matches(false));
        assert!(StatusFilter::Inactive.matches(false));
        assert_eq!(StatusFilter::parse("inactive"), StatusFilter::Inactive);
        assert_eq!(StatusFilter::parse("whatever"), StatusFilter::All);
        assert_eq!(StatusFilter::parse(StatusFilter::Active.as_str()), StatusFilter::Active);
    }
}
