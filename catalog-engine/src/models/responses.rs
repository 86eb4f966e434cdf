use serde::{Deserialize, Serialize};
use std::fmt;

/// What a grid tile shows for one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPreview {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
}

/// Contents of the detail overlay for one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetail {
    pub id: String,
    pub title: String,
    /// Author name followed by the publication year, e.g. `Jane Austen (1813)`.
    pub subtitle: String,
    pub description: String,
    pub image_url: String,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMoreLabel {
    pub remaining: usize,
}

impl ShowMoreLabel {
    pub fn is_enabled(&self) -> bool {
        self.remaining > 0
    }
}

impl fmt::Display for ShowMoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Show more ({})", self.remaining)
    }
}
