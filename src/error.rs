use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemporalError {
    #[error("unknown timezone '{name}': {reason}")]
    TimezoneResolution { name: String, reason: String },

    #[error(
        "invalid instant '{0}': expected RFC 3339 (2025-06-16T10:15:00-04:00) or epoch seconds"
    )]
    InvalidInstant(String),

    #[error(
        "invalid prefix '{0}': must start with a letter and contain only A-Z, 0-9 and '_'"
    )]
    InvalidPrefix(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TemporalError>;
