//! Fixed-size paging over search results.

/// Number of results shown per page.
pub const RESULTS_PER_PAGE: usize = 10;

/// Return the `page`-th window (1-based) of `items`.
///
/// Pages past the end, and page 0, yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(RESULTS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(RESULTS_PER_PAGE).min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `total` results.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(RESULTS_PER_PAGE)
}

/// Previous/next buttons for the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    pub current: usize,
    pub total_pages: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl PageNav {
    pub fn new(current: usize, total_results: usize) -> Self {
        let total_pages = page_count(total_results);
        let prev = (current > 1 && current <= total_pages).then(|| current - 1);
        let next = (current >= 1 && current < total_pages).then(|| current + 1);

        Self {
            current,
            total_pages,
            prev,
            next,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}
