//! Localization framework models.
//!
//! A framework model describes how one localization convention marks text
//! as already translated (usage match templates) and how a key path is
//! written back into source (refactor templates). Models are immutable
//! records kept in a registry keyed by id.
//!
//! ## Module Structure
//!
//! - `flutter_getx`: GetX `.tr` extensions for Flutter
//! - `keypath`: Key path suggestions for hard-coded text
//! - `pubspec`: Framework detection from `pubspec.yaml`
//! - `usages`: Finding existing localized usages with compiled templates

pub mod flutter_getx;
pub mod keypath;
pub mod pubspec;
pub mod usages;

use anyhow::{Context, Result, bail};
use regex::Regex;

pub use flutter_getx::FLUTTER_GETX;
pub use keypath::suggest_keypath;
pub use pubspec::detect_frameworks;
pub use usages::{KeyUsage, find_key_usages};

/// Placeholder substituted into every usage match template.
pub const KEY_PLACEHOLDER: &str = "{key}";

/// Pattern fragment matching a translation key path (`common.confirmDelete`,
/// `items[0].label`).
pub const KEY_PATTERN: &str = r"[\w.\-\[\] ]+?";

/// Signals used to decide whether a framework is in use by a project.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkDetection {
    /// Package names that, when listed in `pubspec.yaml` dependencies,
    /// indicate the framework.
    pub pubspec_dependencies: &'static [&'static str],
}

/// Declarative description of a localization convention.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkUsageModel {
    pub id: &'static str,
    pub display: &'static str,
    pub detection: FrameworkDetection,
    pub language_ids: &'static [&'static str],
    /// Regex templates recognizing localized usages, most specific first.
    /// Each contains [`KEY_PLACEHOLDER`] where the key path is captured.
    pub usage_match_templates: &'static [&'static str],
    pub refactor_templates_fn: fn(&str) -> Vec<String>,
    /// Languages where hard-coded strings may be extracted automatically.
    pub auto_extraction_language_ids: &'static [&'static str],
}

impl FrameworkUsageModel {
    /// Every source form that references `keypath`, preferred form first.
    pub fn refactor_templates(&self, keypath: &str) -> Vec<String> {
        (self.refactor_templates_fn)(keypath)
    }

    /// The preferred replacement for a literal at `keypath`.
    pub fn preferred_refactor(&self, keypath: &str) -> Option<String> {
        self.refactor_templates(keypath).into_iter().next()
    }

    pub fn applies_to(&self, language_id: &str) -> bool {
        self.language_ids.contains(&language_id)
    }

    pub fn supports_auto_extraction(&self, language_id: &str) -> bool {
        self.auto_extraction_language_ids.contains(&language_id)
    }

    /// Usage match templates with the key placeholder substituted, in order.
    pub fn usage_patterns(&self) -> Vec<String> {
        self.usage_match_templates
            .iter()
            .map(|t| t.replace(KEY_PLACEHOLDER, KEY_PATTERN))
            .collect()
    }

    /// Compile the usage match templates, preserving precedence order.
    pub fn compile_usage_matchers(&self) -> Result<Vec<Regex>> {
        self.usage_match_templates
            .iter()
            .zip(self.usage_patterns())
            .map(|(template, pattern)| {
                if !template.contains(KEY_PLACEHOLDER) {
                    bail!(
                        "Usage template of framework '{}' has no {} placeholder: \"{}\"",
                        self.id,
                        KEY_PLACEHOLDER,
                        template
                    );
                }
                Regex::new(&pattern).with_context(|| {
                    format!(
                        "Invalid usage template in framework '{}': \"{}\"",
                        self.id, template
                    )
                })
            })
            .collect()
    }

    /// Check that every usage template compiles.
    pub fn validate(&self) -> Result<()> {
        self.compile_usage_matchers().map(|_| ())
    }
}

static FRAMEWORKS: &[FrameworkUsageModel] = &[FLUTTER_GETX];

/// All registered frameworks.
pub fn all_frameworks() -> &'static [FrameworkUsageModel] {
    FRAMEWORKS
}

pub fn framework_by_id(id: &str) -> Option<&'static FrameworkUsageModel> {
    FRAMEWORKS.iter().find(|f| f.id == id)
}

/// Frameworks applicable to `language_id`, in registry order.
pub fn frameworks_for_language(language_id: &str) -> Vec<&'static FrameworkUsageModel> {
    FRAMEWORKS
        .iter()
        .filter(|f| f.applies_to(language_id))
        .collect()
}
