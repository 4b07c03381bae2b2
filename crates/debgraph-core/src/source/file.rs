//! Local repository file source.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::source::{MetadataSource, SourceError};
use crate::stanza;

/// Metadata source backed by a repository index file on disk.
///
/// The file is read once when the source is opened; every subsequent
/// [`fetch`](MetadataSource::fetch) is a lookup over the cached text.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    text: String,
}

impl FileSource {
    /// Load the repository index at `path`.
    ///
    /// # Errors
    ///
    /// [`SourceError::FileRead`] if the file cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path).map_err(|source| SourceError::FileRead {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), bytes = text.len(), "loaded repository file");
        Ok(Self { path, text })
    }

    /// Path this source was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MetadataSource for FileSource {
    fn fetch(&self, package: &str) -> Result<Vec<String>, SourceError> {
        stanza::parse_dependencies(&self.text, package)
    }
}
