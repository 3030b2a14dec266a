//! Idempotent emission of the module tree.
//!
//! Every operation is create-or-append: directories and leaf files are
//! created only when missing, and an aggregation file gains an export line
//! only when no identical line is already present. A re-run over an
//! unchanged input mutates nothing, and a run over a partially-created tree
//! fills in what is missing.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::base::snake_case;
use crate::error::ScaffoldError;
use crate::model::QualifiedName;
use crate::xmi::DiscoveredTypes;

/// Where and how the module tree is written.
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Root directory of the emitted tree.
    pub out_dir: PathBuf,
    /// Source-file extension, without the dot.
    pub extension: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("src"),
            extension: "rs".to_string(),
        }
    }
}

impl EmitConfig {
    /// File name of the per-level aggregation file.
    fn aggregation_file(&self) -> String {
        format!("mod.{}", self.extension)
    }
}

/// Counters for one emitter run.
///
/// A repeat run over an unchanged tree reports zero created files and zero
/// added exports.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmitReport {
    /// Leaf placeholder files created.
    pub files_created: usize,
    /// Export declarations appended to aggregation files.
    pub exports_added: usize,
    /// Entries skipped because the leaf segment names a namespace.
    pub entries_skipped: usize,
}

/// Emits the module tree for every discovered name, in sorted order.
pub fn emit_tree(
    types: &DiscoveredTypes,
    config: &EmitConfig,
) -> Result<EmitReport, ScaffoldError> {
    let mut report = EmitReport::default();
    for name in types.sorted() {
        emit_entry(&name, config, &mut report)?;
    }
    Ok(report)
}

fn emit_entry(
    name: &QualifiedName,
    config: &EmitConfig,
    report: &mut EmitReport,
) -> Result<(), ScaffoldError> {
    // Lower-case leaf segments denote nested namespaces, not concrete types;
    // container creation for other entries already covers them.
    if !name.leaf().starts_with(|c: char| c.is_ascii_uppercase()) {
        debug!("skipping namespace entry {name}");
        report.entries_skipped += 1;
        return Ok(());
    }

    let leaf = snake_case(name.leaf());
    let containers = name.containers();

    // Directory levels from the output root down to the leaf's parent.
    let mut levels = Vec::with_capacity(containers.len() + 1);
    let mut dir = config.out_dir.clone();
    levels.push(dir.clone());
    for segment in containers {
        dir.push(segment);
        levels.push(dir.clone());
    }

    fs::create_dir_all(&dir).map_err(|e| ScaffoldError::fs(&dir, e))?;

    let leaf_path = dir.join(format!("{leaf}.{}", config.extension));
    if !leaf_path.exists() {
        // Append mode: an existing file is never truncated.
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&leaf_path)
            .map_err(|e| ScaffoldError::fs(&leaf_path, e))?;
        debug!("created {}", leaf_path.display());
        report.files_created += 1;
    }

    // Wire each level's aggregation file to its immediate child, leaf first.
    for (depth, level) in levels.iter().enumerate().rev() {
        let child = if depth == containers.len() {
            leaf.as_str()
        } else {
            containers[depth].as_str()
        };
        let aggregation = level.join(config.aggregation_file());
        if ensure_export(&aggregation, child)? {
            report.exports_added += 1;
        }
    }

    Ok(())
}

/// Appends `pub mod <child>;` to the aggregation file unless an identical
/// line is already present. Returns whether a line was added.
fn ensure_export(path: &Path, child: &str) -> Result<bool, ScaffoldError> {
    let declaration = format!("pub mod {child};");

    let existing = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(ScaffoldError::fs(path, e)),
    };

    if existing.lines().any(|line| line == declaration) {
        debug!("`{declaration}` already in {}", path.display());
        return Ok(false);
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ScaffoldError::fs(path, e))?;
    if !existing.is_empty() && !existing.ends_with('\n') {
        writeln!(file).map_err(|e| ScaffoldError::fs(path, e))?;
    }
    writeln!(file, "{declaration}").map_err(|e| ScaffoldError::fs(path, e))?;
    debug!("`{declaration}` added to {}", path.display());

    Ok(true)
}
