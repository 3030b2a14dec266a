//! Canonical identifier normalization.
//!
//! Converts mixed/Pascal/camel case identifiers into the lower-case,
//! underscore-delimited convention used for module and file names.

use once_cell::sync::Lazy;
use regex::Regex;

// Three ordered passes, each inserting an underscore between its capture
// groups. Order matters: the acronym pass must run on the raw string before
// the word pass breaks it apart.
static ACRONYM_TO_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new("([A-Z0-9]{3})([a-z])").expect("acronym pattern"));
static WORD_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new("(.)([A-Z][a-z]+)").expect("word pattern"));
static LOWER_TO_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new("([a-z0-9])([A-Z])").expect("case pattern"));

/// Converts an identifier to its canonical snake_case form.
///
/// Underscores are inserted after a run of three upper-case-or-digit
/// characters followed by a lower-case letter, before an upper-case letter
/// that starts a word, and between a lower-case-or-digit character and a
/// following upper-case letter; the result is then lower-cased.
///
/// Pure and total, and idempotent: normalizing an already-normalized
/// identifier returns it unchanged.
pub fn snake_case(name: &str) -> String {
    let pass = ACRONYM_TO_WORD.replace_all(name, "${1}_${2}");
    let pass = WORD_BOUNDARY.replace_all(&pass, "${1}_${2}");
    let pass = LOWER_TO_UPPER.replace_all(&pass, "${1}_${2}");
    pass.to_lowercase()
}
