use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// The shared content identifier is absent, so no destination can be
    /// identified at all. Unlike per-field defaults this is not recoverable.
    #[error("{}: no content id column (expected one of {expected:?})", .path.display())]
    MissingJoinKey {
        path: PathBuf,
        expected: &'static [&'static str],
    },
    #[error("{}: required column missing (expected one of {expected:?})", .path.display())]
    MissingColumn {
        path: PathBuf,
        expected: &'static [&'static str],
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
