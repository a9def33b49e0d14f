use thiserror::Error;

/// Application-level error type for the collaborator boundary. Extraction
/// itself never fails; these cover decoding, the filesystem, configuration,
/// and output serialization. Decode errors are consumed by the batch runner
/// and demoted to empty records; the rest abort the run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("No PDF documents found under {0}")]
    EmptyBatch(String),
}
