use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QindexError {
    #[error("{} directory not found", .0.display())]
    MissingDirectory(PathBuf),

    #[error("{} has no top-level title (# ...)", .0.display())]
    MissingTitle(PathBuf),

    #[error("document is missing GENERATED markers")]
    MissingMarkers,

    #[error("marker {0} appears more than once")]
    DuplicateMarker(&'static str),

    #[error("GENERATED:END marker comes before GENERATED:START")]
    MarkersOutOfOrder,

    #[error("{} is out of date, run `qindex generate`", .0.display())]
    Stale(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl QindexError {
    pub fn read(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| QindexError::Read { path, source }
    }

    pub fn write(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| QindexError::Write { path, source }
    }
}

pub type Result<T> = std::result::Result<T, QindexError>;
