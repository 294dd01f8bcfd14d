//! Per-language scanners for hard-coded string literals.
//!
//! Each language gets an [`ExtractionParser`] implementation; the registry maps
//! language ids (and file extensions) to the scanner that handles them. All
//! scanners share the same output shape ([`DetectionResult`]).
//!
//! ## Module Structure
//!
//! - `dart`: Regex-based Dart string literal scanner

pub mod dart;

use std::path::Path;

use crate::core::{data::DetectionResult, rules::ExtractionRule};

pub use dart::DartParser;

/// Default size, in characters, of the window searched for a localization
/// call right after a literal.
pub const DEFAULT_LOOKAHEAD: usize = 30;

/// Options passed through to a language scanner.
///
/// Scanners ignore options they do not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOptions {
    /// How many characters after a literal may hold its localization suffix
    /// (`.tr`, `.trParams(` ...).
    pub lookahead: usize,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }
}

/// A scanner for one family of languages.
pub trait ExtractionParser: Send + Sync {
    /// Stable identifier of this scanner.
    fn id(&self) -> &'static str;

    /// Language ids this scanner handles.
    fn language_ids(&self) -> &'static [&'static str];

    /// Find hard-coded strings in `input`, in source order.
    ///
    /// `rules` judge plain literals, `dynamic_rules` judge literals with
    /// dynamic content. Never fails: malformed input yields fewer results.
    fn detect(
        &self,
        input: &str,
        rules: &[Box<dyn ExtractionRule>],
        dynamic_rules: &[Box<dyn ExtractionRule>],
        options: &ExtractionOptions,
    ) -> Vec<DetectionResult>;
}

static PARSERS: &[&dyn ExtractionParser] = &[&DartParser];

/// All registered scanners.
pub fn all_parsers() -> &'static [&'static dyn ExtractionParser] {
    PARSERS
}

pub fn parser_by_id(id: &str) -> Option<&'static dyn ExtractionParser> {
    PARSERS.iter().copied().find(|p| p.id() == id)
}

/// Scanner handling `language_id`, if any.
pub fn parser_for_language(language_id: &str) -> Option<&'static dyn ExtractionParser> {
    PARSERS
        .iter()
        .copied()
        .find(|p| p.language_ids().contains(&language_id))
}

/// Language id for a source file, derived from its extension.
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "dart" => Some("dart"),
        _ => None,
    }
}
