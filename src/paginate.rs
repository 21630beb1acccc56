//! Fixed-size pagination over an in-memory result list.
//!
//! Pages are 1-based. Callers are expected to stay inside
//! `1..=page_count`; out-of-range pages yield an empty slice.

/// Items of `page` when `results` is cut into pages of `page_size`.
pub fn paginate<T>(results: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(results.len());
    let end = start.saturating_add(page_size).min(results.len());
    &results[start..end]
}

/// Number of pages needed for `len` items. Zero items means zero pages.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Navigation offered for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

impl PageNav {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// What the result area shows.
#[derive(Debug, PartialEq, Eq)]
pub enum PageView<'a, T> {
    /// The sequence is empty.
    NoResults,
    Page { items: &'a [T], nav: PageNav },
}

/// Build the view of `page` over `results`.
pub fn page_view<T>(results: &[T], page: usize, page_size: usize) -> PageView<'_, T> {
    if results.is_empty() {
        return PageView::NoResults;
    }
    PageView::Page {
        items: paginate(results, page, page_size),
        nav: PageNav {
            page,
            page_count: page_count(results.len(), page_size),
            total: results.len(),
        },
    }
}
