use crate::error::CatalogError;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_BOOKS_PER_PAGE: usize = 36;

pub const BOOKS_PER_PAGE_VAR: &str = "BOOKS_PER_PAGE";
pub const EMPTY_TITLE_POLICY_VAR: &str = "EMPTY_TITLE_POLICY";

/// How the title clause treats a query that is blank after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyTitlePolicy {
    /// A blank title query places no constraint on the title.
    #[default]
    MatchAll,
    /// A blank title query fails every book, so nothing matches.
    MatchNone,
}

impl FromStr for EmptyTitlePolicy {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "match_all" | "all" => Ok(EmptyTitlePolicy::MatchAll),
            "match_none" | "none" => Ok(EmptyTitlePolicy::MatchNone),
            other => Err(CatalogError::invalid(format!(
                "unknown empty title policy '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub books_per_page: usize,
    pub empty_title: EmptyTitlePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            books_per_page: DEFAULT_BOOKS_PER_PAGE,
            empty_title: EmptyTitlePolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup, falling
    /// back to defaults for anything unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, CatalogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(BOOKS_PER_PAGE_VAR) {
            config.books_per_page = parse_page_size(&raw)?;
        }

        if let Some(raw) = lookup(EMPTY_TITLE_POLICY_VAR) {
            config.empty_title = raw.parse()?;
        }

        Ok(config)
    }

    pub fn with_books_per_page(mut self, books_per_page: usize) -> Result<Self, CatalogError> {
        if books_per_page == 0 {
            return Err(CatalogError::invalid("books per page must be positive"));
        }
        self.books_per_page = books_per_page;
        Ok(self)
    }

    pub fn with_empty_title(mut self, policy: EmptyTitlePolicy) -> Self {
        self.empty_title = policy;
        self
    }
}

fn parse_page_size(raw: &str) -> Result<usize, CatalogError> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => {
            warn!("Rejected {}={:?}", BOOKS_PER_PAGE_VAR, raw);
            Err(CatalogError::invalid(format!(
                "{} must be a positive integer, got '{}'",
                BOOKS_PER_PAGE_VAR, raw
            )))
        }
    }
}
