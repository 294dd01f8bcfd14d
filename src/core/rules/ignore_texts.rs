use std::collections::HashSet;

use super::{ExtractionRule, ExtractionScore};

/// Skips texts listed in the config `ignoreTexts`.
///
/// Matching is exact after trimming surrounding whitespace.
#[derive(Debug, Clone, Default)]
pub struct IgnoreTextsRule {
    texts: HashSet<String>,
}

impl IgnoreTextsRule {
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl ExtractionRule for IgnoreTextsRule {
    fn name(&self) -> &'static str {
        "ignore-texts"
    }

    fn evaluate(&self, text: &str) -> ExtractionScore {
        if self.texts.contains(text.trim()) {
            ExtractionScore::MustExclude
        } else {
            ExtractionScore::None
        }
    }
}
