use anyhow::Result;
use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;

use crate::core::{
    CheckContext, SourceContext, SourceFile,
    frameworks::{FrameworkUsageModel, find_key_usages},
};

/// A localized key usage resolved to a file position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedKeyUsage {
    pub context: SourceContext,
    pub key: String,
    /// The usage as written (`'home.title'.tr`).
    pub usage: String,
}

/// Flat form of [`LocatedKeyUsage`] for JSON output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyUsageRecord<'a> {
    pub file: &'a str,
    pub line: usize,
    pub col: usize,
    pub key: &'a str,
    pub usage: &'a str,
}

impl LocatedKeyUsage {
    pub fn record(&self) -> KeyUsageRecord<'_> {
        KeyUsageRecord {
            file: self.context.file_path(),
            line: self.context.line(),
            col: self.context.col(),
            key: &self.key,
            usage: &self.usage,
        }
    }
}

/// Every localized key usage in the project, by file then position.
///
/// Empty when no framework is active.
pub fn collect_key_usages(ctx: &CheckContext) -> Result<Vec<LocatedKeyUsage>> {
    let Some(framework) = ctx.framework else {
        return Ok(Vec::new());
    };
    let matchers = framework.compile_usage_matchers()?;

    Ok(ctx
        .source_files()
        .files
        .par_iter()
        .filter(|file| framework.applies_to(file.language_id))
        .flat_map_iter(|file| key_usages_in_file(file, &matchers))
        .collect())
}

pub fn key_usages_in_file(file: &SourceFile, matchers: &[Regex]) -> Vec<LocatedKeyUsage> {
    find_key_usages(&file.content, matchers)
        .into_iter()
        .map(|usage| LocatedKeyUsage {
            context: SourceContext::from_offset(&file.path, &file.content, usage.start),
            usage: file.content[usage.start..usage.end].to_string(),
            key: usage.key,
        })
        .collect()
}

/// Key usages in `file` for `framework`.
pub fn key_usages_for(
    file: &SourceFile,
    framework: &FrameworkUsageModel,
) -> Result<Vec<LocatedKeyUsage>> {
    let matchers = framework.compile_usage_matchers()?;
    Ok(key_usages_in_file(file, &matchers))
}
