use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::AppError;
use crate::extract::headers::HeaderTable;
use crate::output::OutputFormat;
use crate::Cli;

pub const DEFAULT_EMPLOYER: &str = "McKinsey & Company";
pub const DEFAULT_OUTPUT: &str = "resume_summary.csv";
pub const EMPLOYER_ENV: &str = "SCOUT_EMPLOYER";

/// Effective settings for one run, resolved from four layers with the
/// highest winning: command line, environment, optional config file,
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub employer: String,
    pub headers: HeaderTable,
    pub jobs: usize,
    pub rust_log: String,
}

/// On-disk config file shape. Everything optional; a missing field falls
/// through to the next layer down.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub employer: Option<String>,
    pub headers: Option<HeaderTable>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }
}

impl Config {
    pub fn resolve(cli: &Cli) -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        let env_employer = std::env::var(EMPLOYER_ENV).ok();
        Self::resolve_with(cli, env_employer)
    }

    fn resolve_with(cli: &Cli, env_employer: Option<String>) -> Result<Self, AppError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let employer = cli
            .employer
            .clone()
            .or(env_employer)
            .or(file.employer)
            .unwrap_or_else(|| DEFAULT_EMPLOYER.to_string());

        Ok(Config {
            input_dir: cli.input_dir.clone(),
            output_path: cli.output.clone(),
            format: cli.format,
            employer,
            headers: file.headers.unwrap_or_default(),
            jobs: cli.jobs.unwrap_or_else(default_jobs),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
