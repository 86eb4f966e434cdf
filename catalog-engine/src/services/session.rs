use crate::config::{EmptyTitlePolicy, EngineConfig};
use crate::error::CatalogError;
use crate::models::book::Book;
use crate::models::catalog::Catalog;
use crate::models::filter::FilterSpec;
use crate::models::page::{PageCursor, PageResult};
use crate::models::responses::ShowMoreLabel;
use crate::services::query::{evaluate, window};
use tracing::{debug, info};

/// Browsing state owned by the presentation layer: the active filter, its
/// match set and how many pages of it have been revealed.
///
/// The catalog is only borrowed; a session is cheap to drop and rebuild.
#[derive(Debug, Clone)]
pub struct BrowseSession<'a> {
    catalog: &'a Catalog,
    filter: FilterSpec,
    policy: EmptyTitlePolicy,
    matches: Vec<&'a Book>,
    cursor: PageCursor,
}

impl<'a> BrowseSession<'a> {
    /// Evaluates `filter` and returns the session positioned on page 1
    /// together with that page.
    pub fn start(
        catalog: &'a Catalog,
        filter: FilterSpec,
        config: &EngineConfig,
    ) -> Result<(Self, PageResult<&'a Book>), CatalogError> {
        let cursor = PageCursor::first(config.books_per_page)?;
        let matches = evaluate(catalog, &filter, config.empty_title);

        let session = Self {
            catalog,
            filter,
            policy: config.empty_title,
            matches,
            cursor,
        };
        let first = session.current_page();

        info!(
            "Browse session started: {} matches, {} per page",
            session.matches.len(),
            cursor.page_size()
        );

        Ok((session, first))
    }

    /// Replaces the active filter. The page number goes back to 1.
    pub fn search(&mut self, filter: FilterSpec) -> PageResult<&'a Book> {
        self.matches = evaluate(self.catalog, &filter, self.policy);
        self.filter = filter;
        self.cursor = self.cursor.reset();

        debug!("Search replaced match set: {} matches", self.matches.len());

        self.current_page()
    }

    /// Reveals the next page, or returns `None` and leaves the session
    /// untouched when every match is already shown.
    pub fn show_more(&mut self) -> Option<PageResult<&'a Book>> {
        if !self.has_more() {
            return None;
        }

        self.cursor = self.cursor.next();
        let next = self.current_page();
        debug!(
            "Showing page {}: {} items, {} remaining",
            self.cursor.page_number(),
            next.items.len(),
            next.remaining
        );
        Some(next)
    }

    pub fn current_page(&self) -> PageResult<&'a Book> {
        window(&self.matches, self.cursor)
    }

    /// Every match revealed so far, i.e. pages 1 through the current one.
    pub fn shown(&self) -> &[&'a Book] {
        let end = self.cursor.end().min(self.matches.len());
        &self.matches[..end]
    }

    pub fn remaining(&self) -> usize {
        self.matches.len().saturating_sub(self.cursor.end())
    }

    pub fn has_more(&self) -> bool {
        self.remaining() > 0
    }

    pub fn show_more_label(&self) -> ShowMoreLabel {
        ShowMoreLabel {
            remaining: self.remaining(),
        }
    }

    pub fn page_number(&self) -> usize {
        self.cursor.page_number()
    }

    pub fn page_size(&self) -> usize {
        self.cursor.page_size()
    }

    pub fn matches(&self) -> &[&'a Book] {
        &self.matches
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}
