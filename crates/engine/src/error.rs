use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No input files given")]
    NoInputs,

    #[error("Failed to open input file '{path}': {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input file '{path}': {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open output file '{path}' for writing: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Whether the run can carry on with the next input after this error.
    #[must_use]
    pub const fn is_file_scoped(&self) -> bool {
        matches!(self, Self::InputOpen { .. } | Self::InputRead { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
