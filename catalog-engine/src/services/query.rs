use crate::config::EmptyTitlePolicy;
use crate::error::CatalogError;
use crate::models::book::Book;
use crate::models::catalog::Catalog;
use crate::models::filter::FilterSpec;
use crate::models::page::{PageCursor, PageResult};
use crate::utils::text::contains_folded;
use tracing::debug;

/// Returns the books satisfying every clause of `filter`, in catalog order.
pub fn evaluate<'a>(
    catalog: &'a Catalog,
    filter: &FilterSpec,
    policy: EmptyTitlePolicy,
) -> Vec<&'a Book> {
    let needle = filter.title_needle();

    let matches: Vec<&Book> = catalog
        .all_books()
        .iter()
        .filter(|book| matches_clauses(book, filter, needle.as_deref(), policy))
        .collect();

    debug!(
        "Evaluated filter title={:?} author={} genre={}: {} of {} books match",
        filter.title_query,
        filter.author,
        filter.genre,
        matches.len(),
        catalog.len()
    );

    matches
}

/// Whether a single book satisfies `filter`.
pub fn matches(book: &Book, filter: &FilterSpec, policy: EmptyTitlePolicy) -> bool {
    matches_clauses(book, filter, filter.title_needle().as_deref(), policy)
}

fn matches_clauses(
    book: &Book,
    filter: &FilterSpec,
    needle: Option<&str>,
    policy: EmptyTitlePolicy,
) -> bool {
    // Title clause
    match needle {
        Some(needle) => {
            if !contains_folded(&book.title, needle) {
                return false;
            }
        }
        None => {
            if policy == EmptyTitlePolicy::MatchNone {
                return false;
            }
        }
    }

    // Author clause
    if let Some(author_id) = filter.author.id() {
        if !book.has_author(author_id) {
            return false;
        }
    }

    // Genre clause
    if let Some(genre_id) = filter.genre.id() {
        if !book.has_genre(genre_id) {
            return false;
        }
    }

    true
}

/// Cuts page `page_number` (1-based) of `page_size` items out of `matches`.
///
/// `remaining` counts the matches after this page and never goes below zero.
pub fn page<T: Clone>(
    matches: &[T],
    page_number: usize,
    page_size: usize,
) -> Result<PageResult<T>, CatalogError> {
    let cursor = PageCursor::new(page_number, page_size)?;
    Ok(window(matches, cursor))
}

pub(crate) fn window<T: Clone>(matches: &[T], cursor: PageCursor) -> PageResult<T> {
    let start = cursor.start();
    let end = cursor.end();

    let items = if start >= matches.len() {
        Vec::new()
    } else {
        matches[start..end.min(matches.len())].to_vec()
    };

    PageResult {
        items,
        remaining: matches.len().saturating_sub(end),
    }
}
