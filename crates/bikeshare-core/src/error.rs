use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bikeshare explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A city CSV file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV document is malformed or a field has the wrong type.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A `Start Time` value did not match any recognised format.
    #[error("Invalid timestamp format on row {row}: {value}")]
    TimestampParse { row: usize, value: String },

    /// A column every city file must carry is not in the header row.
    #[error("Missing required column \"{column}\" in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// Standard input was closed while a prompt was waiting for an answer.
    #[error("Input closed before a valid answer was given")]
    InputClosed,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;
