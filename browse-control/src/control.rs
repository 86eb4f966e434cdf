use catalog_engine::config::{BOOKS_PER_PAGE_VAR, EMPTY_TITLE_POLICY_VAR};
use catalog_engine::{
    BookDetail, BookPreview, BrowseSession, Catalog, CatalogError, EmptyTitlePolicy, EngineConfig,
    FilterSpec, ThemeMode,
};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
pub struct ListReport {
    pub filter: FilterSpec,
    pub page_number: usize,
    pub page_size: usize,
    pub total_matches: usize,
    pub books: Vec<BookPreview>,
    pub remaining: usize,
    pub show_more: String,
}

#[derive(Debug, Serialize)]
pub struct ThemeReport {
    pub theme: ThemeMode,
    pub properties: Vec<(String, String)>,
}

/// Builds the engine configuration. Each setting comes from its flag if
/// given, otherwise from its environment variable; the page size then falls
/// back to the catalog's own value and finally to the default.
///
/// An environment variable is never read when its flag is present.
pub fn resolve_config<F>(
    page_size: Option<usize>,
    empty_title: Option<EmptyTitlePolicy>,
    lookup: F,
    catalog_hint: Option<usize>,
) -> Result<EngineConfig, CatalogError>
where
    F: Fn(&str) -> Option<String>,
{
    let env_page_size = if page_size.is_none() {
        lookup(BOOKS_PER_PAGE_VAR)
    } else {
        None
    };
    let env_empty_title = if empty_title.is_none() {
        lookup(EMPTY_TITLE_POLICY_VAR)
    } else {
        None
    };
    let env_sets_page_size = env_page_size.is_some();

    let mut config = EngineConfig::from_vars(|key| match key {
        BOOKS_PER_PAGE_VAR => env_page_size.clone(),
        EMPTY_TITLE_POLICY_VAR => env_empty_title.clone(),
        _ => None,
    })?;

    match (page_size, catalog_hint) {
        (Some(size), _) => config = config.with_books_per_page(size)?,
        (None, Some(hint)) if !env_sets_page_size => config = config.with_books_per_page(hint)?,
        _ => {}
    }
    if let Some(policy) = empty_title {
        config = config.with_empty_title(policy);
    }

    Ok(config)
}

/// Presentation-side driver: owns the loaded catalog and the engine
/// configuration and turns user actions into engine calls.
pub struct BrowseControl {
    catalog: Catalog,
    config: EngineConfig,
}

impl BrowseControl {
    pub fn new(catalog: Catalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Runs a search and presses "show more" until `pages` pages are visible
    /// or the matches run out.
    pub fn list(&self, filter: FilterSpec, pages: usize) -> Result<ListReport, CatalogError> {
        if pages == 0 {
            warn!("Rejected request for zero pages");
            return Err(CatalogError::invalid("at least one page must be shown"));
        }

        let (mut session, _) = BrowseSession::start(&self.catalog, filter, &self.config)?;
        for _ in 1..pages {
            if session.show_more().is_none() {
                break;
            }
        }

        let books = self.catalog.previews(session.shown().iter().copied())?;
        info!(
            "Listing {} of {} matches (page {})",
            books.len(),
            session.matches().len(),
            session.page_number()
        );

        Ok(ListReport {
            filter: session.filter().clone(),
            page_number: session.page_number(),
            page_size: session.page_size(),
            total_matches: session.matches().len(),
            books,
            remaining: session.remaining(),
            show_more: session.show_more_label().to_string(),
        })
    }

    pub fn preview(&self, id: &str) -> Result<BookDetail, CatalogError> {
        self.catalog.detail(id)
    }

    pub fn theme(&self, token: Option<&str>, prefers_dark: bool) -> Result<ThemeReport, CatalogError> {
        let theme = match token {
            Some(token) => token.parse::<ThemeMode>()?,
            None => ThemeMode::from_system_preference(prefers_dark),
        };

        let properties = theme
            .palette()
            .css_properties()
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Ok(ThemeReport { theme, properties })
    }
}
