//! Error types for model scanning and module-tree emission.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning a model document or emitting the
/// module tree.
///
/// All variants are fatal: the run unwinds to the caller and no retries are
/// attempted. Every pipeline operation is idempotent, so a failed run is
/// safely repeatable once the underlying condition is fixed.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// XML parsing error in the source document.
    #[error("XML error: {0}")]
    Xml(String),

    /// Declared model type outside the known vocabulary.
    #[error("unknown UML type `{xmi_type}` on element `{element}` at `{path}`")]
    UnknownModelType {
        xmi_type: String,
        element: String,
        path: String,
    },

    /// Filesystem mutation failure, with the path that failed.
    #[error("filesystem error at {path:?}: {source}")]
    Fs {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// IO error without a more specific path context.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// HTTP failure while fetching the source document.
    #[cfg(feature = "fetch")]
    #[error("fetch error for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ScaffoldError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a filesystem error carrying the offending path.
    pub fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Fs {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown-type error with element and path context.
    pub fn unknown_model_type(xmi_type: &str, element: &str, path: &str) -> Self {
        Self::UnknownModelType {
            xmi_type: xmi_type.to_string(),
            element: element.to_string(),
            path: if path.is_empty() {
                "<model root>".to_string()
            } else {
                path.to_string()
            },
        }
    }

    /// Create a fetch error.
    #[cfg(feature = "fetch")]
    pub fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.into(),
            source,
        }
    }
}
