//! Streaming XMI traversal.
//!
//! The model document is consumed as a forward-only stream of start/end
//! events; the [`PathStack`] is the only record of ancestry during the walk.

mod scan;
mod stack;

pub use scan::{DiscoveredTypes, scan_document};
pub use stack::{PathEntry, PathStack};
