use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use weathermap_core::{
    Config, FileStore, MapView, SearchController, SearchLog, SearchOutcome, SearchPage, lookup,
    map,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathermap", version, about = "Search a place, map its weather")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the lookup endpoint URL.
    Configure {
        /// Endpoint URL; prompted for interactively when absent.
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Search a location and write the updated map page.
    Search {
        /// Free-text location, e.g. "Atlanta".
        location: String,

        /// Where to write the rendered map page.
        #[arg(long, default_value = "weather-map.html")]
        out: PathBuf,
    },

    /// Print every location searched so far, oldest first.
    History,
}

/// Terminal rendition of the page surface: the alert area and the history
/// area both land on stdout.
#[derive(Debug, Default)]
struct TerminalPage;

impl SearchPage for TerminalPage {
    fn show_alert(&mut self, message: &str) {
        println!("{message}");
    }

    fn show_history(&mut self, rendered: &str) {
        println!("Previous searches: {rendered}");
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { endpoint } => configure(endpoint),
            Command::Search { location, out } => search(&location, &out).await,
            Command::History => history(),
        }
    }
}

fn configure(endpoint: Option<String>) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let url = match endpoint {
        Some(url) => url,
        None => inquire::Text::new("Lookup endpoint URL:")
            .with_help_message("HTTP endpoint that resolves a location to weather data")
            .prompt()?,
    };

    config.set_endpoint(url);
    config.save()?;

    println!("Endpoint saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn search(location: &str, out: &Path) -> anyhow::Result<()> {
    let config = Config::load()?;
    let lookup = lookup::lookup_from_config(&config)?;
    let log = SearchLog::new(Box::new(FileStore::open_default()?));
    let view = MapView::new(config.map.center(), config.map.zoom);

    let mut controller = SearchController::new(lookup, log, view, TerminalPage);
    let outcome = controller.submit(location).await;

    if outcome == SearchOutcome::Marked {
        let page = map::leaflet::page_html(controller.map(), "Weather map");
        fs::write(out, page)
            .with_context(|| format!("Failed to write map page: {}", out.display()))?;
        println!("Map written to {}", out.display());
    }

    Ok(())
}

fn history() -> anyhow::Result<()> {
    let log = SearchLog::new(Box::new(FileStore::open_default()?));
    for entry in log.list() {
        println!("{entry}");
    }
    Ok(())
}
