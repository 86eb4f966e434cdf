pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{EmptyTitlePolicy, EngineConfig, DEFAULT_BOOKS_PER_PAGE};
pub use error::{CatalogError, LookupKind};
pub use models::book::Book;
pub use models::catalog::{Catalog, CatalogData};
pub use models::filter::{FilterSpec, Selector};
pub use models::page::{PageCursor, PageResult};
pub use models::responses::{BookDetail, BookPreview, ShowMoreLabel};
pub use models::theme::{ThemeMode, ThemePalette};
pub use services::query::{evaluate, matches, page};
pub use services::session::BrowseSession;
pub use services::source::{parse_catalog, CatalogSource, JsonCatalogSource, StaticCatalogSource};
