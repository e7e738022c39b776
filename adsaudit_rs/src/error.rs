//! Errors surfaced by site builds.
//!
//! Rendering itself cannot fail; only reading page data and writing the
//! output can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read data file {}", .path.display())]
    ReadData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid data file {}", .path.display())]
    ParseData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SiteError>;
