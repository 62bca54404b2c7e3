//! Mutable list-view state around the pure pipeline

use crate::query::{evaluate, QueryResult};
use crate::types::{FilterSpec, PageSize, PaginationSpec, UserRecord};

/// Filter and pagination owned by one list view.
///
/// Every change that can shrink the filtered list sends the view back to
/// page 1. `query` writes the clamped page back so a stale page never
/// survives a change in the filtered count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSession {
    filter: FilterSpec,
    pagination: PaginationSpec,
}

impl ListSession {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            filter: FilterSpec::default(),
            pagination: PaginationSpec::new(1, page_size),
        }
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn pagination(&self) -> PaginationSpec {
        self.pagination
    }

    pub fn apply_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
        self.pagination = self.pagination.with_page(1);
    }

    pub fn reset_filter(&mut self) {
        self.apply_filter(FilterSpec::default());
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.pagination = PaginationSpec::new(1, page_size);
    }

    /// Jump to `page`, kept within `1..=total_pages`
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.pagination = self.pagination.with_page(page.min(total_pages.max(1)));
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.go_to(self.pagination.page() + 1, total_pages);
    }

    pub fn previous_page(&mut self) {
        self.pagination = self
            .pagination
            .with_page(self.pagination.page().saturating_sub(1));
    }

    pub fn query(&mut self, records: &[UserRecord]) -> QueryResult {
        let result = evaluate(records, &self.filter, self.pagination);
        if result.effective_page != self.pagination.page() {
            self.pagination = self.pagination.with_page(result.effective_page);
        }
        result
    }
}
