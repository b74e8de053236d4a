use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can stop a patch run. None of these are recovered from.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf, source: io::Error },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: std::str::Utf8Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl PatchError {
    pub fn reading(path: &Path, source: io::Error) -> PatchError {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => PatchError::NotFound { path },
            io::ErrorKind::PermissionDenied => PatchError::PermissionDenied { path, source },
            _ => PatchError::Io { path, source },
        }
    }

    pub fn writing(path: &Path, source: io::Error) -> PatchError {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => PatchError::PermissionDenied { path, source },
            _ => PatchError::Write { path, source },
        }
    }
}
