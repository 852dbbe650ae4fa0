// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run.
#[derive(Error, Debug)]
pub enum OuiError {
    #[error("cannot access {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl OuiError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OuiError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Wrap a CSV error, lifting plain I/O failures into `FileAccess`.
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        let path = path.into();
        if source.is_io_error() {
            OuiError::file_access(path, std::io::Error::from(source))
        } else {
            OuiError::Csv { path, source }
        }
    }
}

/// Result type for ouitag operations
pub type Result<T> = std::result::Result<T, OuiError>;
