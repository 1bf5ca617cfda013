use serde::Serialize;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Compact list of page links: edges, a window around the current page and
/// `None` where pages are skipped.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current + 1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Normalized paging input: both values are always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Builds paging input from raw request values, replacing non-positive
    /// numbers with [`DEFAULT_PAGE`] and [`DEFAULT_ITEMS_PER_PAGE`].
    pub fn new(page: i64, per_page: i64) -> Self {
        let page = usize::try_from(page)
            .ok()
            .filter(|p| *p > 0)
            .unwrap_or(DEFAULT_PAGE);
        let per_page = usize::try_from(per_page)
            .ok()
            .filter(|p| *p > 0)
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE);

        Self { page, per_page }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of matching items across all pages.
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub pages: Vec<Option<usize>>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, pagination: Pagination) -> Self {
        let total_pages = pagination.total_pages(total);
        // Links for a page past the end are built around the last page.
        let current = pagination.page.min(total_pages.max(1));
        let pages = get_pages(total_pages, current, 2, 2, 4, 2);

        Self {
            items,
            total,
            page: pagination.page,
            per_page: pagination.per_page,
            total_pages,
            pages,
        }
    }

    /// Converts the items while keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
            pages: self.pages,
        }
    }
}

/// Returns the window `[(page - 1) * per_page, page * per_page)` of `items`,
/// clipped to its bounds. A page past the end is empty.
pub fn paginate<T: Clone>(items: &[T], pagination: Pagination) -> Page<T> {
    let start = pagination.offset().min(items.len());
    let end = start.saturating_add(pagination.per_page).min(items.len());

    Page::new(items[start..end].to_vec(), items.len(), pagination)
}
