use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A single catalog entry. Field names on the wire follow the catalog data
/// module (`author`, `genres`, `image`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    #[serde(rename = "author")]
    pub author_id: String,
    #[serde(rename = "genres", default)]
    pub genre_ids: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub published: DateTime<Utc>,
    #[serde(rename = "image", default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
}

impl Book {
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    pub fn has_author(&self, author_id: &str) -> bool {
        self.author_id == author_id
    }

    pub fn has_genre(&self, genre_id: &str) -> bool {
        self.genre_ids.iter().any(|genre| genre == genre_id)
    }
}
