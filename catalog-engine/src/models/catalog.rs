use crate::error::{CatalogError, LookupKind};
use crate::models::book::Book;
use crate::models::responses::{BookDetail, BookPreview};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::info;

/// Raw catalog contents as supplied by a loader, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "BOOKS_PER_PAGE")]
    pub books_per_page: Option<usize>,
    #[serde(default)]
    pub authors: BTreeMap<String, String>,
    #[serde(default)]
    pub genres: BTreeMap<String, String>,
    pub books: Vec<Book>,
}

/// The read-only book store: books in display order plus the author and
/// genre name directories.
///
/// Construction validates referential integrity, so every id held by a
/// `Book` inside a `Catalog` is guaranteed to resolve.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    authors: BTreeMap<String, String>,
    genres: BTreeMap<String, String>,
    positions: HashMap<String, usize>,
    books_per_page: Option<usize>,
}

impl Catalog {
    pub fn new(data: CatalogData) -> Result<Self, CatalogError> {
        let CatalogData {
            books_per_page,
            authors,
            genres,
            books,
        } = data;

        if books_per_page == Some(0) {
            return Err(CatalogError::invalid("books per page must be positive"));
        }

        let mut positions = HashMap::with_capacity(books.len());
        for (position, book) in books.iter().enumerate() {
            if !authors.contains_key(&book.author_id) {
                return Err(CatalogError::lookup(LookupKind::Author, &book.author_id));
            }
            if let Some(genre) = book.genre_ids.iter().find(|g| !genres.contains_key(*g)) {
                return Err(CatalogError::lookup(LookupKind::Genre, genre));
            }
            if positions.insert(book.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateBook(book.id.clone()));
            }
        }

        info!(
            "Catalog ready: {} books, {} authors, {} genres",
            books.len(),
            authors.len(),
            genres.len()
        );

        Ok(Self {
            books,
            authors,
            genres,
            positions,
            books_per_page,
        })
    }

    pub fn resolve_author_name(&self, author_id: &str) -> Result<&str, CatalogError> {
        self.authors
            .get(author_id)
            .map(String::as_str)
            .ok_or_else(|| CatalogError::lookup(LookupKind::Author, author_id))
    }

    pub fn resolve_genre_name(&self, genre_id: &str) -> Result<&str, CatalogError> {
        self.genres
            .get(genre_id)
            .map(String::as_str)
            .ok_or_else(|| CatalogError::lookup(LookupKind::Genre, genre_id))
    }

    pub fn all_books(&self) -> &[Book] {
        &self.books
    }

    pub fn find_book(&self, id: &str) -> Result<&Book, CatalogError> {
        self.positions
            .get(id)
            .map(|&position| &self.books[position])
            .ok_or_else(|| CatalogError::lookup(LookupKind::Book, id))
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn authors(&self) -> &BTreeMap<String, String> {
        &self.authors
    }

    pub fn genres(&self) -> &BTreeMap<String, String> {
        &self.genres
    }

    /// Page size suggested by the data source, if it carried one.
    pub fn books_per_page(&self) -> Option<usize> {
        self.books_per_page
    }

    pub fn preview(&self, book: &Book) -> Result<BookPreview, CatalogError> {
        Ok(BookPreview {
            id: book.id.clone(),
            title: book.title.clone(),
            author: self.resolve_author_name(&book.author_id)?.to_string(),
            image_url: book.image_url.clone(),
        })
    }

    pub fn previews<'a, I>(&self, books: I) -> Result<Vec<BookPreview>, CatalogError>
    where
        I: IntoIterator<Item = &'a Book>,
    {
        books.into_iter().map(|book| self.preview(book)).collect()
    }

    pub fn detail(&self, id: &str) -> Result<BookDetail, CatalogError> {
        let book = self.find_book(id)?;
        let author = self.resolve_author_name(&book.author_id)?;
        let genres = book
            .genre_ids
            .iter()
            .map(|genre| self.resolve_genre_name(genre).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BookDetail {
            id: book.id.clone(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", author, book.published_year()),
            description: book.description.clone(),
            image_url: book.image_url.clone(),
            genres,
        })
    }
}
