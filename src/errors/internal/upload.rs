use std::path::PathBuf;
use thiserror::Error;

/// Errors from persisting uploaded files to disk
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Failed to create upload directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write uploaded file {path:?}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
