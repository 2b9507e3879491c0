use thiserror::Error;

#[derive(Error, Debug)]
pub enum LigaError {
    #[error("League page request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("League page returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, LigaError>;
