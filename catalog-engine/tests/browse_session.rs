mod common;

use catalog_engine::{BrowseSession, EmptyTitlePolicy, EngineConfig, FilterSpec};
use common::{classics, generated};
use pretty_assertions::assert_eq;

#[test]
fn show_more_walks_the_whole_match_set() {
    let catalog = generated(100);
    let config = EngineConfig::default();

    let (mut session, first) = BrowseSession::start(&catalog, FilterSpec::default(), &config).unwrap();
    assert_eq!(first.items.len(), 36);
    assert_eq!(first.remaining, 64);
    assert_eq!(session.show_more_label().to_string(), "Show more (64)");

    let mut seen: Vec<String> = first.items.iter().map(|b| b.id.clone()).collect();
    while let Some(next) = session.show_more() {
        seen.extend(next.items.iter().map(|b| b.id.clone()));
    }

    let expected: Vec<String> = catalog.all_books().iter().map(|b| b.id.clone()).collect();
    assert_eq!(seen, expected);
    assert_eq!(session.page_number(), 3);
    assert_eq!(session.remaining(), 0);
    assert_eq!(session.shown().len(), 100);
    assert!(!session.show_more_label().is_enabled());
}

#[test]
fn show_more_past_the_end_changes_nothing() {
    let catalog = classics();
    let config = EngineConfig::default();

    let (mut session, first) = BrowseSession::start(&catalog, FilterSpec::default(), &config).unwrap();
    assert_eq!(first.items.len(), 6);
    assert!(first.is_last());

    assert!(session.show_more().is_none());
    assert!(session.show_more().is_none());
    assert_eq!(session.page_number(), 1);
    assert_eq!(session.current_page().items.len(), 6);
}

#[test]
fn search_resets_to_first_page() {
    let catalog = generated(100);
    let config = EngineConfig::default().with_books_per_page(10).unwrap();

    let (mut session, _) = BrowseSession::start(&catalog, FilterSpec::default(), &config).unwrap();
    session.show_more();
    session.show_more();
    assert_eq!(session.page_number(), 3);

    let first = session.search(FilterSpec::default().with_author("a1"));
    assert_eq!(session.page_number(), 1);
    assert_eq!(session.matches().len(), 20);
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.remaining, 10);
    assert!(first.items.iter().all(|b| b.author_id == "a1"));
    assert_eq!(session.filter().author.id(), Some("a1"));
}

#[test]
fn empty_match_set_is_not_an_error() {
    let catalog = classics();
    let config = EngineConfig::default();

    let (mut session, first) =
        BrowseSession::start(&catalog, FilterSpec::title("Ulysses"), &config).unwrap();
    assert!(first.items.is_empty());
    assert_eq!(first.remaining, 0);
    assert!(!session.has_more());
    assert!(session.show_more().is_none());
    assert_eq!(session.show_more_label().to_string(), "Show more (0)");
}

#[test]
fn session_honours_empty_title_policy() {
    let catalog = classics();
    let strict = EngineConfig::default().with_empty_title(EmptyTitlePolicy::MatchNone);

    let (session, first) =
        BrowseSession::start(&catalog, FilterSpec::from_form("", "austen", "any"), &strict).unwrap();
    assert!(first.items.is_empty());
    assert!(session.matches().is_empty());

    let lenient = EngineConfig::default();
    let (session, _) =
        BrowseSession::start(&catalog, FilterSpec::from_form("", "austen", "any"), &lenient).unwrap();
    assert_eq!(session.matches().len(), 3);
}

#[test]
fn start_rejects_zero_page_size() {
    let catalog = classics();
    let config = EngineConfig {
        books_per_page: 0,
        ..EngineConfig::default()
    };

    let err = BrowseSession::start(&catalog, FilterSpec::default(), &config).unwrap_err();
    assert!(err.is_invalid_argument());
}
