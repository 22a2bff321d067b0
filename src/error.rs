//! Error types for modsweep.
//!
//! This module defines all error types used throughout modsweep, using
//! a combination of `thiserror` for ergonomic error definitions and `miette`
//! for rich diagnostic output.
//!
//! # Error Handling Strategy
//!
//! - All errors derive from [`SweepError`]
//! - Only a root that cannot be listed escapes the scanner; unreadable
//!   subtrees and vanished files are absorbed where they are encountered
//! - Deletion failures are data, recorded in a
//!   [`DeletionSummary`](crate::sweep::DeletionSummary), never errors
//! - Errors are automatically converted to `miette::Result` for CLI output
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use modsweep::error::{Result, SweepError};
//!
//! fn check_root(path: &Path) -> Result<()> {
//!     std::fs::read_dir(path).map_err(|source| SweepError::RootInaccessible {
//!         path: path.to_path_buf(),
//!         source,
//!     })?;
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur in modsweep operations
#[derive(Error, Debug, Diagnostic)]
pub enum SweepError {
    /// The scan root could not be listed.
    ///
    /// This is the only failure the directory finder reports. Every other
    /// directory that cannot be read during a scan is treated as empty.
    #[error("Cannot read scan root '{path}'")]
    #[diagnostic(
        code(modsweep::scan::root_inaccessible),
        help("Check that the directory exists and that you have permission to list it.")
    )]
    RootInaccessible {
        /// The root path that was requested
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File system I/O error outside the scanner, such as resolving the
    /// current working directory.
    #[error("I/O error accessing '{path}'")]
    #[diagnostic(code(modsweep::io_error))]
    IoError {
        /// The path that caused the I/O error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Interactive prompt failed, usually because stdin is not a terminal.
    #[error("Interactive prompt failed")]
    #[diagnostic(
        code(modsweep::prompt::error),
        help("Run modsweep from an interactive terminal, or pass --list to only report sizes.")
    )]
    Prompt(#[from] dialoguer::Error),

    /// The worker pool used for parallel traversal could not be created.
    #[error("Failed to start worker pool")]
    #[diagnostic(
        code(modsweep::pool::build_error),
        help("Try a smaller value for --jobs.")
    )]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Invalid configuration supplied through flags, environment or builders.
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(modsweep::config::error),
        help("Check the required configuration parameters.")
    )]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SweepError>;
