//! Retrieval and caching of the source model document.
//!
//! The traversal engine consumes bytes and never touches the network. This
//! module covers the step before the core runs: reading a cached local copy
//! and, with the `fetch` feature, downloading the document once when the
//! local copy is absent.

use std::fs;
use std::path::Path;

use crate::error::ScaffoldError;

/// Base URL of the published machine-readable DDSI-RTPS 2.2 model.
pub const DDSI_RTPS_SPEC_URL: &str = "https://www.omg.org/spec/DDSI-RTPS/20131215/";

/// File name of the UML/XMI model within the spec publication.
pub const DDSI_RTPS_MODEL_FILE: &str = "dds_rtps_uml_xmi.xmi";

/// Reads a locally cached model document.
pub fn cached_document(path: impl AsRef<Path>) -> Result<Vec<u8>, ScaffoldError> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| ScaffoldError::fs(path, e))
}

/// Downloads the document to `cache_path` unless it already exists, then
/// returns its bytes. An existing local copy is never re-fetched.
#[cfg(feature = "fetch")]
pub fn fetch_document(url: &str, cache_path: impl AsRef<Path>) -> Result<Vec<u8>, ScaffoldError> {
    let cache_path = cache_path.as_ref();
    if cache_path.exists() {
        tracing::debug!("{} already exists", cache_path.display());
        return cached_document(cache_path);
    }

    let response = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .map_err(|e| ScaffoldError::fetch(url, e))?;
    let bytes = response.bytes().map_err(|e| ScaffoldError::fetch(url, e))?;

    fs::write(cache_path, &bytes).map_err(|e| ScaffoldError::fs(cache_path, e))?;
    tracing::debug!("fetched {url} to {}", cache_path.display());

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_document_reads_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("model.xmi");
        fs::write(&path, b"<xmi/>").expect("write");

        let bytes = cached_document(&path).expect("read");
        assert_eq!(bytes, b"<xmi/>");
    }

    #[test]
    fn cached_document_missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.xmi");

        let err = cached_document(&path).expect_err("read should fail");
        assert!(err.to_string().contains("absent.xmi"));
    }
}
