//! The traversal engine: one forward streaming pass over the document.

use indexmap::IndexSet;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{trace, warn};

use crate::base::snake_case;
use crate::error::ScaffoldError;
use crate::model::{Disposition, QualifiedName, ScanConfig, UmlKind};

use super::stack::{PathEntry, PathStack};

/// The deduplicated set of qualified data-type names produced by one scan.
///
/// Iteration follows first-discovered (document) order; [`sorted`] gives the
/// deterministic emission order.
///
/// [`sorted`]: DiscoveredTypes::sorted
#[derive(Debug, Default)]
pub struct DiscoveredTypes {
    names: IndexSet<QualifiedName>,
}

impl DiscoveredTypes {
    fn insert(&mut self, name: QualifiedName) -> bool {
        self.names.insert(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in first-discovered order.
    pub fn iter(&self) -> impl Iterator<Item = &QualifiedName> {
        self.names.iter()
    }

    /// Names sorted lexicographically over their joined rendering.
    pub fn sorted(&self) -> Vec<QualifiedName> {
        let mut names: Vec<QualifiedName> = self.names.iter().cloned().collect();
        names.sort_by_cached_key(|name| name.join());
        names
    }
}

/// Scans a model document and returns the discovered data-type names.
pub fn scan_document(
    input: &[u8],
    config: &ScanConfig,
) -> Result<DiscoveredTypes, ScaffoldError> {
    ModelScanner::new(config).scan(input)
}

struct ModelScanner<'a> {
    config: &'a ScanConfig,
    /// Root namespace rendered as a qualifier, e.g. `Protocol::`.
    root_prefix: String,
    stack: PathStack,
    discovered: DiscoveredTypes,
}

impl<'a> ModelScanner<'a> {
    fn new(config: &'a ScanConfig) -> Self {
        Self {
            config,
            root_prefix: format!("{}::", config.root_namespace),
            stack: PathStack::new(),
            discovered: DiscoveredTypes::default(),
        }
    }

    fn scan(mut self, input: &[u8]) -> Result<DiscoveredTypes, ScaffoldError> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    self.enter(e)?;
                }
                Ok(Event::Empty(ref e)) => {
                    // Self-closing element - handle as enter + exit
                    self.enter(e)?;
                    self.exit();
                }
                Ok(Event::End(_)) => {
                    self.exit();
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ScaffoldError::xml(format!(
                        "parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        debug_assert!(self.stack.is_empty(), "unbalanced traversal stack");
        Ok(self.discovered)
    }

    fn enter(&mut self, e: &BytesStart<'_>) -> Result<(), ScaffoldError> {
        let (name, xmi_type) = element_attrs(e)?;

        // Unnamed or untyped elements never contribute to the path.
        let (Some(name), Some(xmi_type)) = (name, xmi_type) else {
            self.stack.push(PathEntry::Skipped);
            return Ok(());
        };

        let Some(kind) = UmlKind::from_xmi_type(&xmi_type) else {
            return Err(ScaffoldError::unknown_model_type(
                &xmi_type,
                &name,
                &self.stack.visible_path(),
            ));
        };

        let disposition = self.config.classify(kind, &name);
        if disposition == Disposition::Skip {
            trace!("skipping {} `{name}`", kind.xmi_type());
            self.stack.push(PathEntry::Skipped);
            return Ok(());
        }

        if kind.is_auxiliary() {
            warn!("{} `{name}` has no module-tree mapping", kind.xmi_type());
        }

        // The model root and the root namespace occupy a stack slot but stay
        // out of every qualified name.
        if kind == UmlKind::Model {
            self.stack.push(PathEntry::Hidden);
            return Ok(());
        }
        let cleaned = name.strip_prefix(&self.root_prefix).unwrap_or(&name);
        if cleaned == self.config.root_namespace {
            self.stack.push(PathEntry::Hidden);
            return Ok(());
        }

        let segment = shape_segment(cleaned, disposition);
        if segment.is_empty() {
            trace!("{} `{name}` shapes to an empty segment", kind.xmi_type());
            self.stack.push(PathEntry::Skipped);
            return Ok(());
        }

        if self.stack.current_name() == Some(segment.as_str()) {
            // Direct repetition of the enclosing name: keep depth, drop the
            // duplicate from name assembly.
            self.stack.push(PathEntry::Placeholder);
        } else {
            self.stack.push(PathEntry::Segment(segment));
        }

        if disposition == Disposition::LeafCandidate {
            self.record_current_path();
        }

        Ok(())
    }

    fn exit(&mut self) {
        self.stack.pop();
    }

    fn record_current_path(&mut self) {
        let segments = self.stack.visible_segments();
        if segments.is_empty() {
            trace!("no visible segments at data-type element; nothing to record");
            return;
        }
        let name = QualifiedName::new(segments);
        if self.discovered.insert(name.clone()) {
            trace!("discovered {name}");
        }
    }
}

/// Applies the per-segment naming rules: truncate a `[` multiplicity suffix,
/// snake_case container names, and drop the trailing `1` that marks a
/// disambiguated duplicate sibling in the source model.
fn shape_segment(cleaned: &str, disposition: Disposition) -> String {
    let truncated = cleaned.split('[').next().unwrap_or(cleaned);
    let shaped = if disposition == Disposition::Container {
        snake_case(truncated)
    } else {
        truncated.to_string()
    };
    shaped.strip_suffix('1').unwrap_or(&shaped).to_string()
}

/// Extracts the `name` and `xmi:type` attributes in one pass.
fn element_attrs(e: &BytesStart<'_>) -> Result<(Option<String>, Option<String>), ScaffoldError> {
    let mut name = None;
    let mut xmi_type = None;

    for attr_result in e.attributes() {
        let attr =
            attr_result.map_err(|e| ScaffoldError::xml(format!("attribute error: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| ScaffoldError::xml(format!("attribute key error: {e}")))?;

        match key {
            "name" => {
                let value = attr
                    .unescape_value()
                    .map_err(|e| ScaffoldError::xml(format!("attribute value error: {e}")))?;
                name = Some(value.to_string());
            }
            "xmi:type" => {
                let value = attr
                    .unescape_value()
                    .map_err(|e| ScaffoldError::xml(format!("attribute value error: {e}")))?;
                xmi_type = Some(value.to_string());
            }
            _ => {}
        }
    }

    Ok((name, xmi_type))
}
