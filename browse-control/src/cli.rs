use catalog_engine::EmptyTitlePolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse a static book catalog page by page
#[derive(Parser, Debug)]
#[command(name = "browse-control")]
#[command(version = "0.1.0")]
#[command(about = "Browse, filter and preview a static book catalog")]
pub struct Cli {
    /// Catalog JSON document
    #[arg(long, env = "CATALOG_PATH", default_value = "data/catalog.json")]
    pub catalog: PathBuf,

    /// Books per page (overrides BOOKS_PER_PAGE and the catalog's own value)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// How a blank title query behaves: match_all or match_none
    #[arg(long)]
    pub empty_title: Option<EmptyTitlePolicy>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List matching books, revealing one or more pages
    List {
        /// Case-insensitive title substring
        #[arg(short, long, default_value = "")]
        title: String,

        /// Author id, or "any"
        #[arg(short, long, default_value = "any")]
        author: String,

        /// Genre id, or "any"
        #[arg(short, long, default_value = "any")]
        genre: String,

        /// Number of pages to reveal (the first page plus "show more" presses)
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },

    /// Show the detail overlay for one book
    Preview {
        /// Book id
        id: String,
    },

    /// Print the colour values for a theme
    Theme {
        /// "day" or "night"; defaults to the system preference
        mode: Option<String>,

        /// Treat the host as preferring a dark colour scheme
        #[arg(long)]
        prefers_dark: bool,
    },
}
