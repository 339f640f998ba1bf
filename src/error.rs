//! Errors surfaced for the root path of a report

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal errors. Only the root path can produce these; failures on entries
/// below the root are logged and the entry is left out of the tree.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Directory does not exist")]
    NotFound { path: PathBuf },
    #[error("Not a valid directory")]
    NotADirectory { path: PathBuf },
    #[error("cannot read '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Error::NotFound { path } | Error::NotADirectory { path } | Error::Io { path, .. } => {
                path
            }
        }
    }

    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, Error>;
