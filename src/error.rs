use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("No file path provided\nPass the changed file as an argument or set FILE_PATH.")]
    MissingTriggerPath,

    #[error("No matching file pair found for changed file: {path}\nThe file sits outside every discovered pair directory.")]
    NoMatchingPair { path: PathBuf },

    #[error("Source file does not exist: {path}\nThe changed file must be readable to act as the sync source.")]
    SourceFileMissing { path: PathBuf },

    #[error("Failed to read {path}\nCause: {source}\nCheck that the file exists and you have read permissions.")]
    ReadFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}\nCause: {source}\nCheck disk space and write permissions on the destination.")]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to walk {path}\nCause: {source}\nCheck that the directory exists and you have read permissions.")]
    WalkFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File watcher error: {0}\nWatch mode could not monitor the project tree.")]
    Watch(#[from] notify::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;
