//! # xmigen
//!
//! Module-tree scaffolding from UML models in XMI interchange format.
//!
//! The source model is consumed as a forward-only stream of XML events. A
//! single pass reconstructs the fully-qualified name of every data type the
//! model declares, then a second stage scaffolds a module hierarchy on disk:
//! one placeholder source file per type, one `mod` aggregation file per
//! namespace level re-exporting its children. Re-running over an unchanged
//! document mutates nothing.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! scaffold  → module-tree emitter (dirs, leaf files, export lines)
//!   ↓
//! xmi       → streaming traversal engine, path stack, discovered set
//!   ↓
//! model     → UML type vocabulary, classifier, qualified names
//!   ↓
//! base      → identifier normalization
//! ```

// ============================================================================
// MODULES (dependency order: base → model → xmi → scaffold)
// ============================================================================

/// Identifier normalization
pub mod base;

/// Error types shared by every stage
pub mod error;

/// UML type vocabulary, element classification, qualified names
pub mod model;

/// Module-tree synthesis on disk
pub mod scaffold;

/// Retrieval and caching of the source document
pub mod source;

/// Streaming XMI traversal
pub mod xmi;

// Re-export the pipeline surface
pub use error::ScaffoldError;
pub use model::{Disposition, QualifiedName, ScanConfig, UmlKind};
pub use scaffold::{EmitConfig, EmitReport, emit_tree};
pub use xmi::{DiscoveredTypes, scan_document};

/// Runs the full pipeline: scan the document, then emit the module tree.
pub fn generate(
    input: &[u8],
    scan: &ScanConfig,
    emit: &EmitConfig,
) -> Result<EmitReport, ScaffoldError> {
    let discovered = xmi::scan_document(input, scan)?;
    scaffold::emit_tree(&discovered, emit)
}
