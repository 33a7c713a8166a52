//! Pagination
//!
//! Page arithmetic for list views: visible slice, page count and the
//! page-index sequence rendered under the list.

/// Pages shown on each side of the current page in compact markers
const WINDOW_DELTA: usize = 1;

/// One entry of the rendered page-index sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Current page of a list with a fixed page size
///
/// Pages are 1-based. The pager does not own the list; callers pass the
/// length (or the slice) of whatever collection is currently visible,
/// which for posts is the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 1,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// `ceil(len / page_size)`, never less than 1
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Items at offsets `[(current-1)*size, current*size)`, clipped to the list
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.current - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// Jump to `page`; pages outside `[1, total]` are ignored
    pub fn go_to(&mut self, page: usize, len: usize) -> bool {
        if page < 1 || page > self.total_pages(len) || page == self.current {
            return false;
        }
        self.current = page;
        true
    }

    pub fn previous(&mut self, len: usize) -> bool {
        self.go_to(self.current.saturating_sub(1), len)
    }

    pub fn next(&mut self, len: usize) -> bool {
        self.go_to(self.current + 1, len)
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Pull the current page back inside `[1, total]` after the list shrank
    pub fn clamp(&mut self, len: usize) {
        self.current = self.current.min(self.total_pages(len));
    }
}

/// Every page from 1 to `total`
pub fn full_markers(total: usize) -> Vec<PageMarker> {
    (1..=total.max(1)).map(PageMarker::Page).collect()
}

/// First and last page, a window of pages around `current`, and an
/// ellipsis for each gap in between.
///
/// The window is `2 * WINDOW_DELTA + 1` pages wide and slides inward at
/// either end, so `current = 1` of 10 gives `1 2 3 … 10`.
pub fn compact_markers(current: usize, total: usize) -> Vec<PageMarker> {
    let total = total.max(1);
    if total == 1 {
        return vec![PageMarker::Page(1)];
    }
    let current = current.clamp(1, total);
    let width = 2 * WINDOW_DELTA + 1;

    let mut low = current.saturating_sub(WINDOW_DELTA).max(1);
    let mut high = low + width - 1;
    if high > total {
        high = total;
        low = high.saturating_sub(width - 1).max(1);
    }

    // First and last are always emitted, only the interior comes from the window
    let inner_low = low.max(2);
    let inner_high = high.min(total - 1);

    let mut markers = vec![PageMarker::Page(1)];
    if inner_low <= inner_high {
        if inner_low > 2 {
            markers.push(PageMarker::Ellipsis);
        }
        markers.extend((inner_low..=inner_high).map(PageMarker::Page));
        if inner_high < total - 1 {
            markers.push(PageMarker::Ellipsis);
        }
    }
    markers.push(PageMarker::Page(total));
    markers
}
