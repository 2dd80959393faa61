//! Turning a picked image file into something the feed can display.

use crate::types::ImageRef;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// An image file chosen in the creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile(PathBuf);

impl ImageFile {
    /// Wraps the picked path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// The path as picked
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Why an image could not be attached
#[derive(Error, Debug)]
pub enum ImageError {
    /// The file does not exist or cannot be reached
    #[error("image file not found: {}", .path.display())]
    NotFound {
        /// Path as picked
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// The path names a directory or another non-file
    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    /// The path cannot be expressed as a URL
    #[error("cannot build a URL for {}", .0.display())]
    InvalidPath(PathBuf),
}

/// Resolves picked files into displayable references
pub trait ImageResolver: Send + Sync {
    /// Produce a reference the feed can render
    ///
    /// # Errors
    ///
    /// Returns an [`ImageError`] when the file cannot be attached.
    fn resolve(&self, file: &ImageFile) -> Result<ImageRef, ImageError>;
}

/// Resolves files on the local filesystem to `file://` URLs
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileResolver;

impl ImageResolver for LocalFileResolver {
    fn resolve(&self, file: &ImageFile) -> Result<ImageRef, ImageError> {
        let path = file
            .path()
            .canonicalize()
            .map_err(|source| ImageError::NotFound {
                path: file.path().to_path_buf(),
                source,
            })?;

        if !path.is_file() {
            return Err(ImageError::NotAFile(path));
        }

        Url::from_file_path(&path)
            .map(ImageRef::new)
            .map_err(|()| ImageError::InvalidPath(path))
    }
}
