//! Forward-only paging over a trip table for the "raw data" prompt.

use bikeshare_core::models::TripRecord;
use bikeshare_data::table::TripTable;

/// Default number of rows shown per request.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Hands out consecutive, non-overlapping windows of a table, starting at row 0.
#[derive(Debug, Clone)]
pub struct RawDataPager {
    offset: usize,
    page_size: usize,
}

impl RawDataPager {
    /// A `page_size` of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    /// Index of the first row the next page will contain.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The next unseen rows, or `None` once the table is exhausted.
    pub fn next_page<'t>(&mut self, table: &'t TripTable) -> Option<&'t [TripRecord]> {
        let page = table.page(self.offset, self.page_size);
        if page.is_empty() {
            return None;
        }
        self.offset += page.len();
        Some(page)
    }
}

impl Default for RawDataPager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
