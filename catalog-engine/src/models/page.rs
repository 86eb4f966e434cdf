use crate::config::DEFAULT_BOOKS_PER_PAGE;
use crate::error::CatalogError;
use serde::Serialize;

/// Position within a match set. Page numbers start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageCursor {
    page_size: usize,
    page_number: usize,
}

impl PageCursor {
    pub fn new(page_number: usize, page_size: usize) -> Result<Self, CatalogError> {
        validate(page_number, page_size)?;
        Ok(Self {
            page_size,
            page_number,
        })
    }

    pub fn first(page_size: usize) -> Result<Self, CatalogError> {
        Self::new(1, page_size)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn next(self) -> Self {
        Self {
            page_number: self.page_number.saturating_add(1),
            ..self
        }
    }

    pub fn reset(self) -> Self {
        Self {
            page_number: 1,
            ..self
        }
    }

    /// Index of the first item on this page.
    pub fn start(&self) -> usize {
        (self.page_number - 1).saturating_mul(self.page_size)
    }

    /// Index one past the last item on this page.
    pub fn end(&self) -> usize {
        self.page_number.saturating_mul(self.page_size)
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_BOOKS_PER_PAGE,
            page_number: 1,
        }
    }
}

fn validate(page_number: usize, page_size: usize) -> Result<(), CatalogError> {
    if page_number < 1 {
        return Err(CatalogError::invalid(format!(
            "page number must be at least 1, got {}",
            page_number
        )));
    }
    if page_size == 0 {
        return Err(CatalogError::invalid("page size must be positive"));
    }
    Ok(())
}

/// One window over a match set plus the count of matches after it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub remaining: usize,
}

impl<T> PageResult<T> {
    pub fn is_last(&self) -> bool {
        self.remaining == 0
    }

    pub fn map<U, F>(self, f: F) -> PageResult<U>
    where
        F: FnMut(T) -> U,
    {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            remaining: self.remaining,
        }
    }
}
