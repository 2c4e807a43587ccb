use thiserror::Error;

/// Result type local to salesq-io.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    #[error("malformed dataset: {0}")]
    Malformed(String),

    #[error("cannot write as csv: {0}")]
    Unrepresentable(String),
}
