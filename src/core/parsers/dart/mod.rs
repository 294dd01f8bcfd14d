//! Dart string literal scanner.
//!
//! Finds hard-coded strings in Dart source that are not yet wrapped in a GetX
//! translation call. There is no Dart parser behind this: literals, comments
//! and directives are recognized with regexes and positional scans, which is
//! fast and good enough for review tooling but can misjudge unusual layouts.
//!
//! Each literal goes through, in order, stopping at the first rejection:
//! 1. already localized (`'key'.tr`, `.trParams(` ...)
//! 2. on an `import`/`export`/`part` line
//! 3. inside a comment
//! 4. content that looks like code (paths, identifiers, colors ...)
//! 5. the caller's extraction rules

pub mod context;
pub mod filters;
pub mod scanner;


use crate::core::{
    data::{DetectionResult, StringSpan},
    rules::{ExtractionRule, dynamic::has_interpolation, should_extract},
};

use self::{
    context::{is_in_comment, is_in_import_statement},
    filters::{is_already_localized, is_non_user_facing_content},
    scanner::find_string_literals,
};

use super::{ExtractionOptions, ExtractionParser};

/// Source tag attached to every Dart detection.
pub const DART_SOURCE: &str = "dart-string";

#[derive(Debug, Clone, Copy, Default)]
pub struct DartParser;

impl ExtractionParser for DartParser {
    fn id(&self) -> &'static str {
        "dart"
    }

    fn language_ids(&self) -> &'static [&'static str] {
        &["dart"]
    }

    fn detect(
        &self,
        input: &str,
        rules: &[Box<dyn ExtractionRule>],
        dynamic_rules: &[Box<dyn ExtractionRule>],
        options: &ExtractionOptions,
    ) -> Vec<DetectionResult> {
        detect(input, rules, dynamic_rules, options)
    }
}

/// Find hard-coded strings in Dart source, in source order.
///
/// Literals with interpolation (`'Hi $name'`) are judged by `dynamic_rules`,
/// all others by `rules`.
pub fn detect(
    input: &str,
    rules: &[Box<dyn ExtractionRule>],
    dynamic_rules: &[Box<dyn ExtractionRule>],
    options: &ExtractionOptions,
) -> Vec<DetectionResult> {
    find_string_literals(input)
        .into_iter()
        .filter(|span| is_candidate(input, span, rules, dynamic_rules, options))
        .map(|span| DetectionResult::from_span(span, DART_SOURCE))
        .collect()
}

fn is_candidate(
    input: &str,
    span: &StringSpan,
    rules: &[Box<dyn ExtractionRule>],
    dynamic_rules: &[Box<dyn ExtractionRule>],
    options: &ExtractionOptions,
) -> bool {
    if is_already_localized(input, span.end, options.lookahead) {
        return false;
    }
    if is_in_import_statement(input, span.start) {
        return false;
    }
    if is_in_comment(input, span.start) {
        return false;
    }
    if is_non_user_facing_content(&span.text) {
        return false;
    }

    let rules = if has_interpolation(&span.text) {
        dynamic_rules
    } else {
        rules
    };
    should_extract(&span.text, rules)
}
