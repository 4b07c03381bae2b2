//! Remote archive source over HTTP.
//!
//! Downloads a `Packages` or `Packages.gz` index from a Debian-style
//! archive and caches the decompressed text for the lifetime of the
//! source. The transport applies a bounded timeout; the graph builder
//! adds no timeout of its own and never retries.

use std::io::Read;
use std::time::Duration;

use flate2::read::GzDecoder;
use tracing::debug;

use crate::source::{MetadataSource, SourceError};
use crate::stanza;

/// Conventional location of the binary package index under an archive
/// root, appended when the configured URL does not already name one.
const DEFAULT_INDEX_PATH: &str = "dists/stable/main/binary-amd64/Packages.gz";

/// Transport timeout for the index download.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Metadata source backed by a remote archive's package index.
#[derive(Debug)]
pub struct RemoteSource {
    url: String,
    text: String,
}

impl RemoteSource {
    /// Download the index reachable from `url` and cache its text.
    ///
    /// `url` may point directly at a `Packages`/`Packages.gz` file or
    /// at an archive root, in which case the conventional
    /// `dists/stable/main/binary-amd64/Packages.gz` suffix is joined.
    /// A `.gz` index is gunzipped before caching.
    ///
    /// # Errors
    ///
    /// [`SourceError::Http`] on transport failure or a non-UTF-8
    /// index; [`SourceError::Decompress`] when the gzip stream is
    /// corrupt.
    pub fn fetch_index(url: &str) -> Result<Self, SourceError> {
        let url = index_url(url);
        let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();

        let response = agent
            .get(&url)
            .set("User-Agent", "debgraph")
            .call()
            .map_err(|err| SourceError::Http {
                url: url.clone(),
                detail: err.to_string(),
            })?;

        let mut raw = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut raw)
            .map_err(|err| SourceError::Http {
                url: url.clone(),
                detail: err.to_string(),
            })?;

        let text = decode_index(&url, raw)?;
        debug!(%url, bytes = text.len(), "downloaded package index");
        Ok(Self { url, text })
    }

    /// The fully resolved index URL this source downloaded.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl MetadataSource for RemoteSource {
    fn fetch(&self, package: &str) -> Result<Vec<String>, SourceError> {
        stanza::parse_dependencies(&self.text, package)
    }
}

/// Resolve the configured URL to a concrete index URL.
fn index_url(base: &str) -> String {
    if base.ends_with("Packages") || base.ends_with("Packages.gz") {
        base.to_string()
    } else {
        format!("{}/{DEFAULT_INDEX_PATH}", base.trim_end_matches('/'))
    }
}

/// Decompress (for `.gz` URLs) and UTF-8-decode a downloaded index.
fn decode_index(url: &str, raw: Vec<u8>) -> Result<String, SourceError> {
    if url.ends_with(".gz") {
        let mut decoded = String::new();
        GzDecoder::new(raw.as_slice())
            .read_to_string(&mut decoded)
            .map_err(|source| SourceError::Decompress {
                url: url.to_string(),
                source,
            })?;
        return Ok(decoded);
    }

    String::from_utf8(raw).map_err(|err| SourceError::Http {
        url: url.to_string(),
        detail: format!("index is not valid UTF-8: {err}"),
    })
}
