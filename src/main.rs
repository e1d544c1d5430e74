use anyhow::{Context, Result};
use bilder_liste::config::AppConfig;
use bilder_liste::selector::{select_directories, DirectorySelector, Selection};
use bilder_liste::selectors::fixed::FixedSelector;
use bilder_liste::selectors::prompt::PromptSelector;
use clap::Parser;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Builds a spreadsheet of image previews, capture dates and GPS positions"
)]
struct Cli {
    /// Folder with the .jpg/.jpeg/.png files; asked for when omitted
    source: Option<PathBuf>,

    /// Folder that receives the report; asked for when omitted
    output: Option<PathBuf>,

    /// Configuration file layered over the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    log_level: Option<String>,

    /// Extract with this many threads (row order is unaffected)
    #[arg(long)]
    workers: Option<usize>,

    /// Use native folder dialogs for missing folders
    #[arg(long)]
    dialog: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AppConfig::new().context("Failed to load configuration")?,
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(workers) = cli.workers {
        config.num_workers = workers;
    }

    env_logger::Builder::new()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    info!("Starting bilder_liste");

    let mut selector =
        FixedSelector::new(cli.source, cli.output).with_fallback(fallback_selector(cli.dialog)?);
    let (source_dir, output_dir) = match select_directories(&mut selector) {
        Selection::Ready {
            source_dir,
            output_dir,
        } => (source_dir, output_dir),
        Selection::Cancelled(message) => {
            println!("{message}");
            return Ok(());
        }
    };

    let summary = bilder_liste::run(&config, &source_dir, &output_dir)?;

    for failure in &summary.failures {
        eprintln!("{failure}");
    }
    info!(
        "{} image(s) written, {} skipped",
        summary.rows,
        summary.failures.len()
    );
    println!("File created: {}", summary.output_path.display());

    Ok(())
}

fn fallback_selector(dialog: bool) -> Result<Box<dyn DirectorySelector>> {
    if dialog {
        dialog_selector()
    } else {
        Ok(Box::new(PromptSelector::stdin()))
    }
}

#[cfg(feature = "dialog")]
fn dialog_selector() -> Result<Box<dyn DirectorySelector>> {
    Ok(Box::new(bilder_liste::selectors::dialog::DialogSelector))
}

#[cfg(not(feature = "dialog"))]
fn dialog_selector() -> Result<Box<dyn DirectorySelector>> {
    anyhow::bail!("--dialog needs a build with the `dialog` feature")
}
