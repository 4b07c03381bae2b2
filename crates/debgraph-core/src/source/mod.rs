//! Metadata sources: where direct dependency lists come from.
//!
//! The graph builder only depends on the [`MetadataSource`] capability;
//! which backing store answers it is decided at construction time, not
//! by runtime type inspection. Two implementations ship here:
//!
//! - [`FileSource`] — a local repository index file.
//! - [`RemoteSource`] — a `Packages`/`Packages.gz` index downloaded
//!   from a remote archive over HTTP.
//!
//! Both load the index once at construction and answer every `fetch`
//! from the cached text, so a per-call failure is always a missing
//! package; transport and read failures surface when the source is
//! built. Errors fall into exactly two classes the builder cares
//! about: a missing package, and an unavailable backing store (see
//! [`SourceError::is_unavailable`]).

pub mod file;
pub mod remote;

pub use file::FileSource;
pub use remote::RemoteSource;

use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// SourceError
// ---------------------------------------------------------------------------

/// Classified failures of a metadata source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The package is absent from the backing metadata.
    #[error("package '{0}' not found in repository metadata")]
    PackageNotFound(String),

    /// The local repository file could not be read.
    #[error("failed to read repository file {path}: {source}")]
    FileRead {
        /// Path of the repository file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The remote index could not be fetched.
    #[error("repository fetch failed for {url}: {detail}")]
    Http {
        /// The index URL that was requested.
        url: String,
        /// Transport-level failure detail.
        detail: String,
    },

    /// The remote index downloaded but did not decompress.
    #[error("failed to decompress repository index {url}: {source}")]
    Decompress {
        /// The index URL that was requested.
        url: String,
        /// Underlying decoder error.
        source: io::Error,
    },
}

impl SourceError {
    /// `true` for the source-unavailable class (read/fetch/decompress
    /// failures); `false` for a missing package.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        !matches!(self, Self::PackageNotFound(_))
    }
}

// ---------------------------------------------------------------------------
// MetadataSource
// ---------------------------------------------------------------------------

/// Capability consumed by the graph builder: direct dependency names
/// of one package.
///
/// A single attempt per call; implementations do not retry. The
/// returned names preserve `Depends:` first-occurrence order and are
/// already reduced to one bare name per dependency expression.
pub trait MetadataSource {
    /// Fetch the direct dependencies of `package`.
    ///
    /// # Errors
    ///
    /// [`SourceError::PackageNotFound`] when the package is absent;
    /// an unavailable-class error when the backing store cannot be
    /// consulted.
    fn fetch(&self, package: &str) -> Result<Vec<String>, SourceError>;
}
