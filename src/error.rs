use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Error margin must not be negative (got {0})")]
    NegativeMargin(f64),

    #[error("Unknown settings field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, NutriError>;
