//! Error type for configuration file operations.
//!
//! Most of the public surface is deliberately permissive: [`crate::load`]
//! treats an unreadable file as an empty configuration, and
//! [`crate::create`] / [`crate::save`] report failure as `false`.  The
//! `try_*` variants in [`crate::file`] expose the underlying cause through
//! [`StoreError`] for callers that want to tell failures apart.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration file operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing a configuration file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file to load does not exist.
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Builds the error for an I/O failure on `path`, mapping
    /// [`std::io::ErrorKind::NotFound`] to [`StoreError::NotFound`].
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Returns the path the failing operation was acting on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_maps_not_found_kind() {
        let err = StoreError::from_io(
            "missing.cfg",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(err.path(), std::path::Path::new("missing.cfg"));
    }

    #[test]
    fn test_from_io_keeps_other_kinds_as_io() {
        let err = StoreError::from_io(
            "locked.cfg",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_display_includes_path() {
        let err = StoreError::NotFound {
            path: PathBuf::from("dog.cfg"),
        };
        assert_eq!(err.to_string(), "config file not found: dog.cfg");
    }
}
