use crate::utils::text::fold_query;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Form value that stands for "no constraint" on the author and genre fields.
pub const ANY: &str = "any";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    #[default]
    Any,
    Id(String),
}

impl Selector {
    /// Parses a raw form value. `"any"` and blank values select everything.
    pub fn from_form(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ANY) {
            Selector::Any
        } else {
            Selector::Id(value.to_string())
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Selector::Any => None,
            Selector::Id(id) => Some(id),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id().unwrap_or(ANY))
    }
}

/// Search criteria submitted from the search form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub title_query: String,
    #[serde(default)]
    pub author: Selector,
    #[serde(default)]
    pub genre: Selector,
}

impl FilterSpec {
    pub fn new(title_query: impl Into<String>, author: Selector, genre: Selector) -> Self {
        Self {
            title_query: title_query.into(),
            author,
            genre,
        }
    }

    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        Self::new(title, Selector::from_form(author), Selector::from_form(genre))
    }

    pub fn title(title_query: impl Into<String>) -> Self {
        Self::new(title_query, Selector::Any, Selector::Any)
    }

    pub fn with_author(mut self, author_id: impl Into<String>) -> Self {
        self.author = Selector::Id(author_id.into());
        self
    }

    pub fn with_genre(mut self, genre_id: impl Into<String>) -> Self {
        self.genre = Selector::Id(genre_id.into());
        self
    }

    /// The lowercased, trimmed title query, or `None` when it is blank.
    pub fn title_needle(&self) -> Option<String> {
        let folded = fold_query(&self.title_query);
        if folded.is_empty() {
            None
        } else {
            Some(folded)
        }
    }
}
