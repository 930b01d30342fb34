use thiserror::Error;

/// opspulse error types
#[derive(Error, Debug)]
pub enum OpspulseError {
    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Metric source name not in the registry
    #[error("unknown metric source: {0}")]
    UnknownSource(String),

    /// Range boundary argument that is neither RFC 3339 nor YYYY-MM-DD
    #[error("invalid date '{0}': expected RFC 3339 or YYYY-MM-DD")]
    InvalidDate(String),

    /// No readable input files after path/glob expansion
    #[error("no input files matched: {0}")]
    NoInput(String),
}

/// Result type alias for opspulse
pub type Result<T> = std::result::Result<T, OpspulseError>;
