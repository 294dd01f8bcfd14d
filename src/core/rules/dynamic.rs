use std::sync::LazyLock;

use regex::Regex;

use super::{ExtractionRule, ExtractionScore};
use crate::utils::contains_alphabetic;

// `${expr}` (no nested braces) or `$identifier`
static INTERPOLATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^}]*\}|\$[A-Za-z_][A-Za-z0-9_]*").unwrap());

/// Whether a Dart literal body contains string interpolation.
///
/// An escaped dollar (`\$`) is not interpolation.
pub fn has_interpolation(text: &str) -> bool {
    INTERPOLATION_REGEX
        .find_iter(text)
        .any(|m| !text[..m.start()].ends_with('\\'))
}

/// Literal text left once every interpolation is removed.
pub fn strip_interpolations(text: &str) -> String {
    INTERPOLATION_REGEX.replace_all(text, "").into_owned()
}

/// Judges interpolated strings by their static part only.
///
/// `'${user.name}: ${count}'` carries no words of its own and is skipped;
/// `'Hello, $name!'` is prose around a placeholder and is extracted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicRule;

impl ExtractionRule for DynamicRule {
    fn name(&self) -> &'static str {
        "dynamic"
    }

    fn evaluate(&self, text: &str) -> ExtractionScore {
        if contains_alphabetic(&strip_interpolations(text)) {
            ExtractionScore::ShouldInclude
        } else {
            ExtractionScore::MustExclude
        }
    }
}
