mod config;
mod errors;
mod extract;
mod ingest;
mod models;
mod output;
mod runner;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extract::Extractor;
use crate::ingest::discover::discover_documents;
use crate::ingest::source::{PdfTextSource, TextSource};
use crate::output::{write_records, OutputFormat};
use crate::runner::run_batch;

#[derive(Parser, Debug)]
#[command(
    name = "scout",
    version,
    about = "Summarize exported resume PDFs into a candidate table"
)]
struct Cli {
    /// Directory scanned recursively for PDF files
    input_dir: PathBuf,

    /// Path of the summary file to write
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Output encoding
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Employer line that anchors the experience section
    #[arg(long)]
    employer: Option<String>,

    /// Optional TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// How many PDFs to decode in parallel (defaults to available cores)
    #[arg(long)]
    jobs: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve configuration first so logging can honor RUST_LOG from .env
    let config = Config::resolve(&cli)?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Scout v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Reading {} -> {} ({:?}), employer {:?}, {} job(s)",
        config.input_dir.display(),
        config.output_path.display(),
        config.format,
        config.employer,
        config.jobs
    );

    let paths = discover_documents(&config.input_dir)
        .with_context(|| format!("Scanning {}", config.input_dir.display()))?;
    info!("Discovered {} PDF document(s)", paths.len());

    let source: Arc<dyn TextSource> = Arc::new(PdfTextSource);
    let extractor = Arc::new(Extractor::new(
        config.headers.clone(),
        config.employer.clone(),
    ));

    let (records, summary) = run_batch(source, extractor, paths, config.jobs).await;

    write_records(&config.output_path, config.format, &records)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    info!(
        "Done: {} decoded, {} failed, {} total",
        summary.decoded, summary.failed, summary.total
    );
    Ok(())
}
