use anyhow::Context;
use catalog_engine::{CatalogSource, FilterSpec, JsonCatalogSource};
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};

mod cli;
mod control;
mod render;

use cli::{Cli, Commands};
use control::{resolve_config, BrowseControl};

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text(value));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("browse_control=info,catalog_engine=info")
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = JsonCatalogSource::new(&cli.catalog)
        .load()
        .with_context(|| format!("failed to load catalog {}", cli.catalog.display()))?;

    let config = resolve_config(
        cli.page_size,
        cli.empty_title,
        |key| std::env::var(key).ok(),
        catalog.books_per_page(),
    )?;
    info!(
        "Using {} books per page, empty title policy {:?}",
        config.books_per_page, config.empty_title
    );

    let control = BrowseControl::new(catalog, config);

    let result = match cli.command {
        Commands::List {
            title,
            author,
            genre,
            pages,
        } => {
            let filter = FilterSpec::from_form(&title, &author, &genre);
            control
                .list(filter, pages)
                .map_err(anyhow::Error::from)
                .and_then(|report| emit(cli.json, &report, render::list))
        }
        Commands::Preview { id } => control
            .preview(&id)
            .map_err(anyhow::Error::from)
            .and_then(|detail| emit(cli.json, &detail, render::detail)),
        Commands::Theme { mode, prefers_dark } => control
            .theme(mode.as_deref(), prefers_dark)
            .map_err(anyhow::Error::from)
            .and_then(|report| emit(cli.json, &report, render::theme)),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
