//! Data-driven accept/reject rules for extraction candidates.
//!
//! Scanners call [`should_extract`] only after their structural filters
//! (comments, imports, localized calls, content heuristics) have passed, so
//! rules only see plausibly-prose text.
//!
//! ## Module Structure
//!
//! - `basic`: General-purpose prose heuristics (BasicRule, NonAsciiRule)
//! - `dynamic`: Rules for interpolated strings (DynamicRule)
//! - `ignore_texts`: Exact-text exclusions from configuration (IgnoreTextsRule)

pub mod basic;
pub mod dynamic;
pub mod ignore_texts;

pub use basic::{BasicRule, NonAsciiRule};
pub use dynamic::DynamicRule;
pub use ignore_texts::IgnoreTextsRule;

/// Verdict of a single rule for a candidate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionScore {
    /// Extract, regardless of later rules.
    MustInclude,
    ShouldInclude,
    /// No opinion.
    None,
    ShouldExclude,
    /// Skip, regardless of later rules.
    MustExclude,
}

/// A single accept/reject rule.
pub trait ExtractionRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn evaluate(&self, text: &str) -> ExtractionScore;
}

/// An ordered set of rules.
pub type RuleSet = Vec<Box<dyn ExtractionRule>>;

/// Aggregate rule verdicts for `text`.
///
/// The first `MustInclude`/`MustExclude` decides immediately. Otherwise the
/// last `ShouldInclude`/`ShouldExclude` wins; no opinion at all means skip.
pub fn should_extract(text: &str, rules: &[Box<dyn ExtractionRule>]) -> bool {
    let mut verdict = ExtractionScore::None;

    for rule in rules {
        match rule.evaluate(text) {
            ExtractionScore::MustExclude => return false,
            ExtractionScore::MustInclude => return true,
            ExtractionScore::None => {}
            score => verdict = score,
        }
    }

    verdict == ExtractionScore::ShouldInclude
}

/// Rules applied to plain (non-interpolated) literals.
pub fn default_rules() -> RuleSet {
    vec![Box::new(BasicRule), Box::new(NonAsciiRule)]
}

/// Rules applied to literals with dynamic content.
pub fn default_dynamic_rules() -> RuleSet {
    vec![Box::new(DynamicRule)]
}
