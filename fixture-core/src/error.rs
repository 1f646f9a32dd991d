//! Error types for fixture generation.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of a generation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The target could not be created: missing directory, permission denied.
    FileSystem,
    /// The data did not reach the file completely: disk full, interrupted write.
    Resource,
}

/// Failure modes of fixture generation.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to create or truncate the output file
    #[error("{}: cannot create output file: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to write the image buffer
    #[error("{}: write failed: {source}", path.display())]
    WriteOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to flush written data to storage before closing
    #[error("{}: cannot sync output file: {source}", path.display())]
    SyncOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Returns the failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::CreateOutput { .. } => ErrorKind::FileSystem,
            Error::WriteOutput { .. } | Error::SyncOutput { .. } => ErrorKind::Resource,
        }
    }

    /// Path of the file the failing operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            Error::CreateOutput { path, .. }
            | Error::WriteOutput { path, .. }
            | Error::SyncOutput { path, .. } => path,
        }
    }

    /// The underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            Error::CreateOutput { source, .. }
            | Error::WriteOutput { source, .. }
            | Error::SyncOutput { source, .. } => source,
        }
    }
}
