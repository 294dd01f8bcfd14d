use std::sync::LazyLock;

use regex::Regex;

use super::{ExtractionRule, ExtractionScore};

static WORD_CHAR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w").unwrap());

static CAMEL_CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:[A-Z][a-z0-9]*)+$").unwrap());

static NUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\d.]+$").unwrap());

static SINGLE_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

static THREE_LETTERS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]{3}").unwrap());

/// General prose heuristics.
///
/// - empty → must exclude
/// - has a space and a word character → include
/// - camelCase → must exclude
/// - only digits and dots → must exclude
/// - a single alphanumeric word → include
/// - any non-ASCII character → include
/// - three consecutive ASCII letters → include
/// - anything else → exclude
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRule;

impl ExtractionRule for BasicRule {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn evaluate(&self, text: &str) -> ExtractionScore {
        if text.is_empty() {
            return ExtractionScore::MustExclude;
        }
        if text.contains(' ') && WORD_CHAR_REGEX.is_match(text) {
            return ExtractionScore::ShouldInclude;
        }
        if CAMEL_CASE_REGEX.is_match(text) || NUMERIC_REGEX.is_match(text) {
            return ExtractionScore::MustExclude;
        }
        if SINGLE_WORD_REGEX.is_match(text) || !text.is_ascii() {
            return ExtractionScore::ShouldInclude;
        }
        if THREE_LETTERS_REGEX.is_match(text) {
            return ExtractionScore::ShouldInclude;
        }
        ExtractionScore::ShouldExclude
    }
}

/// Text in a non-Latin script is almost always meant for users.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonAsciiRule;

impl ExtractionRule for NonAsciiRule {
    fn name(&self) -> &'static str {
        "non-ascii"
    }

    fn evaluate(&self, text: &str) -> ExtractionScore {
        if text.chars().any(|c| !c.is_ascii() && c.is_alphabetic()) {
            ExtractionScore::MustInclude
        } else {
            ExtractionScore::None
        }
    }
}
