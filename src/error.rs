//! Error types for the agenda pipeline
//!
//! Errors fall into two classes. Input and configuration errors are fatal:
//! the run stops and nothing is written. Output errors are reported to the
//! user but the process still exits cleanly.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for agenda generation
#[derive(Debug, Error)]
pub enum AgendaError {
    #[error("Failed to open input file {}: {source}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed input in {}: {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: crate::input::RecordError,
    },

    #[error("Failed to create agenda file {}: {source}", .path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write agenda file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AgendaError {
    /// Create input open error
    pub fn input_open<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::InputOpen {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create malformed input error
    pub fn malformed_input<P, E>(path: P, source: E) -> Self
    where
        P: AsRef<Path>,
        E: Into<crate::input::RecordError>,
    {
        Self::MalformedInput {
            path: path.as_ref().to_path_buf(),
            source: source.into(),
        }
    }

    /// Create output creation error
    pub fn output_create<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::OutputCreate {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create output write error
    pub fn output_write<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Whether this error must terminate the process with a failure status
    pub fn is_fatal(&self) -> bool {
        match self {
            AgendaError::InputOpen { .. }
            | AgendaError::MalformedInput { .. }
            | AgendaError::Config(_) => true,
            AgendaError::OutputCreate { .. } | AgendaError::OutputWrite { .. } => false,
        }
    }
}

/// Result type for agenda operations
pub type AgendaResult<T> = Result<T, AgendaError>;
