use catalog_engine::{
    evaluate, page, Book, BrowseSession, Catalog, CatalogData, EmptyTitlePolicy, EngineConfig,
    FilterSpec,
};
use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::BTreeMap;

fn create_sample_catalog(count: usize) -> Catalog {
    let authors: BTreeMap<String, String> = (0..50)
        .map(|i| (format!("author-{}", i), format!("Test Author {}", i)))
        .collect();
    let genres: BTreeMap<String, String> = (0..12)
        .map(|i| (format!("genre-{}", i), format!("Genre {}", i)))
        .collect();

    let mut books = vec![Book {
        id: "moby".to_string(),
        title: "Moby Dick".to_string(),
        author_id: "author-0".to_string(),
        genre_ids: vec!["genre-0".to_string()],
        description: "Call me Ishmael.".to_string(),
        published: Utc.with_ymd_and_hms(1851, 10, 18, 0, 0, 0).unwrap(),
        image_url: String::new(),
        popularity: None,
        pages: Some(635),
    }];

    for i in 1..count {
        books.push(Book {
            id: format!("book-{}", i),
            title: format!("Test Book {}", i),
            author_id: format!("author-{}", i % 50),
            genre_ids: vec![format!("genre-{}", i % 12), format!("genre-{}", (i + 5) % 12)],
            description: String::new(),
            published: Utc.with_ymd_and_hms(1800 + (i % 200) as i32, 1, 1, 0, 0, 0).unwrap(),
            image_url: String::new(),
            popularity: None,
            pages: None,
        });
    }

    Catalog::new(CatalogData {
        books_per_page: None,
        authors,
        genres,
        books,
    })
    .unwrap()
}

fn benchmark_evaluate_title(c: &mut Criterion) {
    let catalog = create_sample_catalog(5000);
    let filter = FilterSpec::title("moby");

    c.bench_function("evaluate_title", |b| {
        b.iter(|| evaluate(black_box(&catalog), black_box(&filter), EmptyTitlePolicy::MatchAll))
    });
}

fn benchmark_evaluate_with_filters(c: &mut Criterion) {
    let catalog = create_sample_catalog(5000);
    let filter = FilterSpec::title("test book")
        .with_author("author-25")
        .with_genre("genre-1");

    c.bench_function("evaluate_with_filters", |b| {
        b.iter(|| evaluate(black_box(&catalog), black_box(&filter), EmptyTitlePolicy::MatchAll))
    });
}

fn benchmark_page(c: &mut Criterion) {
    let catalog = create_sample_catalog(5000);
    let all: Vec<&Book> = catalog.all_books().iter().collect();

    c.bench_function("page_middle", |b| {
        b.iter(|| page(black_box(&all), black_box(70), black_box(36)))
    });
}

fn benchmark_session_walk(c: &mut Criterion) {
    let catalog = create_sample_catalog(5000);
    let config = EngineConfig::default();

    c.bench_function("session_walk", |b| {
        b.iter(|| {
            let (mut session, _) =
                BrowseSession::start(&catalog, FilterSpec::default(), &config).unwrap();
            while session.show_more().is_some() {}
            session.page_number()
        })
    });
}

criterion_group!(
    benches,
    benchmark_evaluate_title,
    benchmark_evaluate_with_filters,
    benchmark_page,
    benchmark_session_walk
);
criterion_main!(benches);
