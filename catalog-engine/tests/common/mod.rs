#![allow(dead_code)]

use catalog_engine::{Book, Catalog, CatalogData};
use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;

pub fn book(id: &str, title: &str, author: &str, genres: &[&str], year: i32) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author_id: author.to_string(),
        genre_ids: genres.iter().map(|g| g.to_string()).collect(),
        description: format!("About {}", title),
        published: Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap(),
        image_url: format!("https://covers.example.org/{}.jpg", id),
        popularity: None,
        pages: None,
    }
}

fn directory(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}

pub fn classics_data() -> CatalogData {
    CatalogData {
        books_per_page: None,
        authors: directory(&[
            ("melville", "Herman Melville"),
            ("austen", "Jane Austen"),
            ("shelley", "Mary Shelley"),
        ]),
        genres: directory(&[
            ("adventure", "Adventure"),
            ("romance", "Romance"),
            ("horror", "Horror"),
            ("classic", "Classic"),
        ]),
        books: vec![
            book("b1", "Moby Dick", "melville", &["adventure", "classic"], 1851),
            book("b2", "Pride and Prejudice", "austen", &["romance", "classic"], 1813),
            book("b3", "Frankenstein", "shelley", &["horror", "classic"], 1818),
            book("b4", "Emma", "austen", &["romance"], 1815),
            book("b5", "Typee", "melville", &["adventure"], 1846),
            book("b6", "Sense and Sensibility", "austen", &["romance", "classic"], 1811),
        ],
    }
}

pub fn classics() -> Catalog {
    Catalog::new(classics_data()).unwrap()
}

/// A catalog of `count` generated books spread over five authors and four
/// genres.
pub fn generated(count: usize) -> Catalog {
    let authors: BTreeMap<String, String> = (0..5)
        .map(|i| (format!("a{}", i), format!("Author {}", i)))
        .collect();
    let genres: BTreeMap<String, String> = (0..4)
        .map(|i| (format!("g{}", i), format!("Genre {}", i)))
        .collect();

    let books = (0..count)
        .map(|i| {
            let author = format!("a{}", i % 5);
            let genre = format!("g{}", i % 4);
            book(
                &format!("book-{}", i),
                &format!("Volume {}", i),
                &author,
                &[genre.as_str()],
                1900 + (i % 100) as i32,
            )
        })
        .collect();

    Catalog::new(CatalogData {
        books_per_page: None,
        authors,
        genres,
        books,
    })
    .unwrap()
}
