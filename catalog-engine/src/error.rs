use std::fmt;
use thiserror::Error;

/// Which directory a failed lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Author,
    Genre,
    Book,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LookupKind::Author => "author",
            LookupKind::Genre => "genre",
            LookupKind::Book => "book",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown {kind} id: {id}")]
    Lookup { kind: LookupKind, id: String },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Duplicate book id: {0}")]
    DuplicateBook(String),
    #[error("Catalog source contains no books")]
    EmptySource,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn lookup(kind: LookupKind, id: impl Into<String>) -> Self {
        CatalogError::Lookup {
            kind,
            id: id.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        CatalogError::InvalidArgument(message.into())
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self, CatalogError::Lookup { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CatalogError::InvalidArgument(_))
    }
}
