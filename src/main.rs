use anyhow::{Context, Result};
use clap::Parser;
use launchdex::{
    config::Config,
    indexer::{DirectoryEntries, DirectoryIndexer, SortOrder},
    logging,
    source::PathSource,
    Catalogue,
};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "launchdex")]
#[command(about = "Build the launcher catalogue for the configured directories and print it")]
#[command(version)]
struct Cli {
    /// Directories to index (override the configured paths)
    #[arg(value_name = "ROOT")]
    roots: Vec<PathBuf>,

    /// Settings file (defaults to config/settings.toml or ~/.config/launchdex/settings.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the index as a JSON array
    #[arg(long)]
    json: bool,

    /// Sort names ignoring case
    #[arg(long)]
    case_insensitive: bool,

    /// Record each directory once instead of once per visit and once per listing
    #[arg(long)]
    once: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = Config::load_from(cli.config.as_deref())?;

    let mut options = config.index_options();
    if cli.case_insensitive {
        options.sort = SortOrder::CaseInsensitive;
    }
    if cli.once {
        options.directory_entries = DirectoryEntries::Once;
    }

    let catalogue = Catalogue::new(DirectoryIndexer::new(options));
    let index = if cli.roots.is_empty() {
        catalogue.rebuild(&config)?
    } else {
        catalogue.rebuild(&cli.roots)?
    };

    if index.is_empty() && cli.roots.is_empty() && config.roots()?.is_empty() {
        tracing::warn!("No paths configured; add [index] paths to settings.toml or pass ROOT arguments");
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.json {
        serde_json::to_writer_pretty(&mut out, index.as_ref()).context("Failed to write index as JSON")?;
        writeln!(out)?;
    } else {
        for entry in index.iter() {
            writeln!(out, "{}\t{}", entry.display_name, entry.canonical_path.display())?;
        }
    }
    out.flush()?;

    Ok(())
}
