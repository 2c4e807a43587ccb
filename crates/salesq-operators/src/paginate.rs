//! Pagination: slice the sorted set by 1-indexed page number.

use salesq_core::page::PaginationInfo;

/// Rows on the page `info` points at. Out-of-range pages are empty,
/// never a panic.
pub fn paginate<'s, T>(items: &'s [T], info: &PaginationInfo) -> &'s [T] {
    match info.offset() {
        Some(start) if start < items.len() => {
            let end = (start + info.page_size).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_is_partial() {
        let items: Vec<u32> = (1..=25).collect();
        let info = PaginationInfo::new(items.len(), 3, 10);
        assert_eq!(paginate(&items, &info), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn out_of_range_is_empty() {
        let items: Vec<u32> = (1..=25).collect();
        assert!(paginate(&items, &PaginationInfo::new(25, 0, 10)).is_empty());
        assert!(paginate(&items, &PaginationInfo::new(25, 4, 10)).is_empty());
        let none: Vec<u32> = Vec::new();
        assert!(paginate(&none, &PaginationInfo::new(0, 1, 10)).is_empty());
    }
}
