use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::CatalogKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Player slot {slot} out of range (expected 0..4)")]
    PlayerSlotOutOfRange { slot: usize },

    #[error("Cannot aggregate an empty collection of shifts")]
    EmptyCollection,

    #[error("Unknown {kind} label: {label:?}")]
    UnknownLabel { kind: CatalogKind, label: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileOpen {
            path: path.into(),
            source,
        }
    }
}
