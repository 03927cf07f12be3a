// src/error.rs
use std::path::{Path, PathBuf};

/// Errors raised while loading inputs or writing results. Classification
/// itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum KpcsError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("stroke diagram {} has no kvg:element attribute", path.display())]
    MissingRoot { path: PathBuf },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("snapshot format version {found} is not supported (expected {expected})")]
    SnapshotVersion { found: u32, expected: u32 },

    #[error("failed to persist {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        source: tempfile::PersistError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown character: {0}")]
    UnknownCharacter(String),
}

impl KpcsError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        KpcsError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, KpcsError>;
