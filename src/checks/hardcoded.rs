//! Hard-coded text check.
//!
//! Runs the language scanner over each file and turns its detections into
//! located issues with a refactor hint from the active framework.

use rayon::prelude::*;

use crate::{
    core::{
        CheckContext, SourceContext, SourceFile,
        frameworks::{FrameworkUsageModel, suggest_keypath},
        parsers::{ExtractionOptions, parser_for_language},
        rules::ExtractionRule,
    },
    issues::HardcodedTextIssue,
};

pub fn check_hardcoded_text_issues(ctx: &CheckContext) -> Vec<HardcodedTextIssue> {
    let rules = ctx.config.extraction_rules();
    let dynamic_rules = ctx.config.extraction_dynamic_rules();
    let options = ctx.config.extraction_options();
    let framework = ctx.framework;

    ctx.source_files()
        .files
        .par_iter()
        .flat_map_iter(|file| {
            hardcoded_issues_in_file(file, &rules, &dynamic_rules, &options, framework)
        })
        .collect()
}

/// Hard-coded text issues in one file, in source order.
pub fn hardcoded_issues_in_file(
    file: &SourceFile,
    rules: &[Box<dyn ExtractionRule>],
    dynamic_rules: &[Box<dyn ExtractionRule>],
    options: &ExtractionOptions,
    framework: Option<&FrameworkUsageModel>,
) -> Vec<HardcodedTextIssue> {
    let Some(parser) = parser_for_language(file.language_id) else {
        return Vec::new();
    };
    let framework = framework.filter(|f| f.supports_auto_extraction(file.language_id));

    parser
        .detect(&file.content, rules, dynamic_rules, options)
        .into_iter()
        .map(|detection| {
            let context = SourceContext::from_offset(&file.path, &file.content, detection.start);
            let hint = framework.and_then(|f| refactor_hint(f, &detection.text));
            HardcodedTextIssue {
                context,
                detection,
                hint,
            }
        })
        .collect()
}

fn refactor_hint(framework: &FrameworkUsageModel, text: &str) -> Option<String> {
    framework
        .preferred_refactor(&suggest_keypath(text))
        .map(|replacement| format!("replace with {}", replacement))
}
