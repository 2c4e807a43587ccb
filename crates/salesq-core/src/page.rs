//! Pagination metadata and the page-number window shown to users.
//!
//! Pages are 1-indexed. `total_pages` is `ceil(total_items / page_size)`,
//! so an empty result has zero pages and no valid page number at all.

use serde::{Deserialize, Serialize};

/// Rows per page unless configured otherwise.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// One entry of the page-number window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSlot {
    Page(usize),
    Gap,
}

impl PaginationInfo {
    /// `page_size` of 0 is treated as 1; config validation rejects it earlier.
    pub fn new(total_items: usize, current_page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            current_page,
            page_size,
            total_items,
            total_pages: total_items.div_ceil(page_size),
        }
    }

    /// Whether `page` names an existing page.
    pub fn contains(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages
    }

    /// Zero-based offset of the current page, or `None` when it is out of range.
    pub fn offset(&self) -> Option<usize> {
        self.contains(self.current_page)
            .then(|| (self.current_page - 1) * self.page_size)
    }

    /// 1-based inclusive `(first, last)` item numbers on the current page.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        let offset = self.offset()?;
        let last = (offset + self.page_size).min(self.total_items);
        Some((offset + 1, last))
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Compact page-number window: every page when at most `max_visible`
    /// exist, otherwise first and last page around a short run near the
    /// current one, with gaps where numbers are skipped.
    pub fn visible_pages(&self, max_visible: usize) -> Vec<PageSlot> {
        let total = self.total_pages;
        let current = self.current_page;
        if total <= max_visible {
            return (1..=total).map(PageSlot::Page).collect();
        }

        let pages: Vec<usize> = if current <= 3 {
            (1..=4).chain([total]).collect()
        } else if current + 2 >= total {
            [1].into_iter()
                .chain(total.saturating_sub(3).max(1)..=total)
                .collect()
        } else {
            [1, current - 1, current, current + 1, total].into()
        };
        with_gaps(pages, total)
    }
}

/// Sorted, deduplicated, clamped to `1..=total`, with a gap between
/// non-adjacent numbers.
fn with_gaps(mut pages: Vec<usize>, total: usize) -> Vec<PageSlot> {
    pages.retain(|&p| p >= 1 && p <= total);
    pages.sort_unstable();
    pages.dedup();

    let mut slots = Vec::with_capacity(pages.len() * 2);
    let mut prev: Option<usize> = None;
    for p in pages {
        if matches!(prev, Some(q) if p > q + 1) {
            slots.push(PageSlot::Gap);
        }
        slots.push(PageSlot::Page(p));
        prev = Some(p);
    }
    slots
}
