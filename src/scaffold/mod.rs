//! Module-tree synthesis on disk.

mod emitter;

pub use emitter::{EmitConfig, EmitReport, emit_tree};
