use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("path cannot be empty")]
    EmptyPath,

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// True when the underlying failure is a missing path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(err) if err.kind() == io::ErrorKind::NotFound)
    }

    /// True when the underlying failure is a permission error.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Error::Io(err) if err.kind() == io::ErrorKind::PermissionDenied)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
