use std::ops::Range;

pub const PAGE_SIZE: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

/// 1-based page cursor over a list whose length is passed in per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Moves to `page` if it exists for a list of `len` items. Out-of-range
    /// requests leave the cursor where it is.
    pub fn go_to(&mut self, page: usize, len: usize) -> bool {
        if page < 1 || page > self.total_pages(len) {
            return false;
        }
        self.page = page;
        true
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page < self.total_pages(len)
    }

    /// Index range of the current page, cut to `len`.
    pub fn range(&self, len: usize) -> Range<usize> {
        let first = (self.page - 1) * self.page_size;
        let last = first + self.page_size;
        first.min(len)..last.min(len)
    }

    /// `(first, last, total)` for a "Showing a to b of m" caption, 1-based
    /// and inclusive. `None` for an empty list.
    pub fn showing(&self, len: usize) -> Option<(usize, usize, usize)> {
        let r = self.range(len);
        if r.is_empty() {
            return None;
        }
        Some((r.start + 1, r.end, len))
    }

    /// First page, last page and the pages around the current one; the page
    /// two steps away on either side is drawn as an ellipsis.
    pub fn buttons(&self, len: usize) -> Vec<PageButton> {
        let total = self.total_pages(len);
        let cur = self.page;
        let mut out = Vec::new();
        for p in 1..=total {
            if p == 1 || p == total || (p + 1 >= cur && p <= cur + 1) {
                out.push(PageButton::Page(p));
            } else if p + 2 == cur || p == cur + 2 {
                out.push(PageButton::Ellipsis);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../tests/admin/pager_tests.rs"]
mod tests;
