use crate::error::CatalogError;
use crate::models::catalog::{Catalog, CatalogData};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Supplies the catalog once at startup.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// Reads a catalog document from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError> {
        info!("Loading catalog from {}", self.path.display());

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            error!("Failed to read catalog {}: {}", self.path.display(), e);
            e
        })?;

        parse_catalog(&raw)
    }
}

/// Wraps catalog data that is already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    data: CatalogData,
}

impl StaticCatalogSource {
    pub fn new(data: CatalogData) -> Self {
        Self { data }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.data.clone())
    }
}

/// Parses and validates a catalog JSON document.
pub fn parse_catalog(raw: &str) -> Result<Catalog, CatalogError> {
    let data: CatalogData = serde_json::from_str(raw)?;

    if data.books.is_empty() {
        error!("Catalog document has no books");
        return Err(CatalogError::EmptySource);
    }

    Catalog::new(data)
}
