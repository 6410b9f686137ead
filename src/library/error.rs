use std::{io, path::PathBuf};

use thiserror::Error;

/// Boxed cause reported by a merge backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type LibraryResult<T> = Result<T, LibraryError>;

/// Failures raised while managing a tenant's PDF folders.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("storage operation failed for {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file `{name}` does not exist")]
    NotFound { name: String },

    #[error("no PDF files found in folder `{folder}`")]
    NoInput { folder: String },

    #[error("failed to merge PDFs for folder `{folder}`: {source}")]
    Merge {
        folder: String,
        #[source]
        source: BoxError,
    },
}

impl LibraryError {
    pub(crate) fn directory_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// True when the failure means the requested folder itself is absent.
    pub fn is_missing_directory(&self) -> bool {
        matches!(
            self,
            Self::DirectoryRead { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}
