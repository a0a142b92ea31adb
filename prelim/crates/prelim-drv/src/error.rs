//! Error types for the driver.

use std::path::PathBuf;

use prelim_lex::ScanError;
use thiserror::Error;

/// Everything that can stop the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A source file could not be read.
    #[error("Could not open file: {}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying failure.
        source: std::io::Error,
    },

    /// The scanner met a byte it cannot classify.
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),

    /// The configuration file or a setting in it is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Nothing to scan.
    #[error("No input files")]
    NoInput,
}

/// Result alias for the driver.
pub type Result<T> = std::result::Result<T, DriverError>;
