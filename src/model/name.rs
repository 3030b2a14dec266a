//! Qualified data-type names.

use std::fmt;

/// A fully qualified data-type name: the root-to-leaf sequence of visible
/// path segments recorded when the traversal reaches a data-type element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    segments: Vec<String>,
}

impl QualifiedName {
    /// Builds a name from visible path segments, root first.
    ///
    /// Invariant: `segments` is non-empty; the traversal never records an
    /// empty path.
    pub fn new(segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments }
    }

    /// All segments, root first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final segment: the type name itself.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// Segments preceding the leaf: the container chain.
    pub fn containers(&self) -> &[String] {
        &self.segments[..self.segments.len().saturating_sub(1)]
    }

    /// Renders the name with `::` separators.
    pub fn join(&self) -> String {
        self.segments.join("::")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}
