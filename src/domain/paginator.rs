// src/domain/paginator.rs

use std::fmt;

/// Rows-per-page choices offered by the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    TwentyFive,
}

impl PageSize {
    pub const OPTIONS: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::TwentyFive];

    pub fn rows(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }

    /// Only the enumerated sizes are accepted.
    pub fn from_rows(rows: usize) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|size| size.rows() == rows)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows())
    }
}

/// Zero-based page index plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    page: usize,
    page_size: PageSize,
}

impl PageState {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the size always returns to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.reset_page();
    }

    pub fn reset_page(&mut self) {
        self.page = 0;
    }

    fn start(&self) -> usize {
        self.page.saturating_mul(self.page_size.rows())
    }

    /// `items[page * size .. page * size + size]`, clipped. Out of range is empty.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start().min(items.len());
        let end = start.saturating_add(self.page_size.rows()).min(items.len());
        &items[start..end]
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.rows())
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.start().saturating_add(self.page_size.rows()) < total
    }

    /// One-based `(from, to)` of the rows shown, `(0, 0)` when nothing is shown.
    pub fn displayed_range(&self, total: usize) -> (usize, usize) {
        let start = self.start();
        if start >= total {
            return (0, 0);
        }
        let end = start.saturating_add(self.page_size.rows()).min(total);
        (start + 1, end)
    }
}
