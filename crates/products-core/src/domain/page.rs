//! Page requests: a bounded, ordered slice of a product listing.

use super::sort::{ProductOrder, SortSpec, SortSpecError};

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Errors produced while building a page request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    #[error("Page size must not be less than one")]
    ZeroSize,

    #[error(transparent)]
    Sort(#[from] SortSpecError),
}

/// A zero-based page index, a page size and the ordering to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Vec<ProductOrder>,
}

impl PageRequest {
    /// Build a page request, resolving every sort criterion to a product
    /// attribute.
    pub fn of(page: u32, size: u32, sort: &SortSpec) -> Result<Self, PageRequestError> {
        if size == 0 {
            return Err(PageRequestError::ZeroSize);
        }

        let sort = sort
            .orders()
            .iter()
            .map(ProductOrder::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { page, size, sort })
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> &[ProductOrder] {
        &self.sort
    }

    /// Number of rows to skip before this page starts.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}
