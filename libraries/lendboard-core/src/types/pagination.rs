//! Pagination parameters

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Most numbered page buttons shown in the list footer
pub const MAX_PAGE_BUTTONS: usize = 7;

/// Rows per page. Only the sizes offered by the list footer are valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Twenty, PageSize::Fifty];

    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl TryFrom<usize> for PageSize {
    type Error = DashboardError;

    fn try_from(value: usize) -> Result<Self> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| {
                DashboardError::invalid_input(format!(
                    "page size must be one of 10, 20 or 50, got {}",
                    value
                ))
            })
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

/// Requested page and page size. `page` is 1-based and never 0.
///
/// The page may still exceed the number of pages; `evaluate` clamps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationSpec {
    page: usize,
    page_size: PageSize,
}

impl PaginationSpec {
    /// A page of 0 is raised to 1.
    pub fn new(page: usize, page_size: PageSize) -> Self {
        Self {
            page: page.max(1),
            page_size,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn with_page(self, page: usize) -> Self {
        Self::new(page, self.page_size)
    }
}

impl Default for PaginationSpec {
    fn default() -> Self {
        Self::new(1, PageSize::default())
    }
}

/// Numbered buttons for the list footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageButtons {
    pub numbers: Vec<usize>,
    /// More pages exist past the last numbered button
    pub overflow: bool,
}

pub fn page_buttons(total_pages: usize) -> PageButtons {
    PageButtons {
        numbers: (1..=total_pages.min(MAX_PAGE_BUTTONS)).collect(),
        overflow: total_pages > MAX_PAGE_BUTTONS,
    }
}
