use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Download failed: {url} ({reason})")]
    Network { url: String, reason: String },

    #[error("Downloaded file is not a valid zip archive: {path}")]
    CorruptArchive { path: PathBuf },

    #[error("Models directory not found in extracted archive: {path}")]
    MissingModelsDir { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}
