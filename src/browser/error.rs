//! Error types for root validation and request browsing

use hyper::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Startup errors for the served root directory
#[derive(Debug, Error)]
pub enum RootError {
    #[error("root path does not exist: {0}")]
    NotFound(PathBuf),

    #[error("root path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("cannot access root path {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while serving a single request
#[derive(Debug, Error)]
pub enum BrowseError {
    /// The resolved path does not exist
    #[error("path not found: {0}")]
    NotFound(String),

    /// Probing, listing or opening failed for another reason
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path exists but is neither a directory nor a regular file
    #[error("not a regular file: {0}")]
    NotRegularFile(PathBuf),

    /// Listing serialization failed
    #[error("failed to render listing: {0}")]
    Render(#[from] serde_json::Error),
}

impl BrowseError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// HTTP status reported to the client
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Io { .. } | Self::NotRegularFile(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
