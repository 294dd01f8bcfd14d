use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::Path,
};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{FrameworkUsageModel, all_frameworks};

pub const PUBSPEC_FILE_NAME: &str = "pubspec.yaml";

/// The parts of `pubspec.yaml` used for framework detection.
#[derive(Debug, Default, Deserialize)]
struct Pubspec {
    // `dependencies:` with no entries parses as null
    #[serde(default)]
    dependencies: Option<BTreeMap<String, serde_yaml::Value>>,
    #[serde(default)]
    dev_dependencies: Option<BTreeMap<String, serde_yaml::Value>>,
}

/// Parse the dependency names (regular and dev) out of pubspec content.
pub fn parse_pubspec_dependencies(content: &str) -> Result<HashSet<String>> {
    if content.trim().is_empty() {
        return Ok(HashSet::new());
    }
    let pubspec: Option<Pubspec> = serde_yaml::from_str(content)?;
    let pubspec = pubspec.unwrap_or_default();

    Ok(pubspec
        .dependencies
        .into_iter()
        .chain(pubspec.dev_dependencies)
        .flat_map(|deps| deps.into_keys())
        .collect())
}

/// Frameworks whose detection dependencies appear in the project's
/// `pubspec.yaml`.
///
/// A project without a pubspec uses no framework.
pub fn detect_frameworks(project_dir: &Path) -> Result<Vec<&'static FrameworkUsageModel>> {
    let path = project_dir.join(PUBSPEC_FILE_NAME);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let dependencies = parse_pubspec_dependencies(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(all_frameworks()
        .iter()
        .filter(|f| {
            f.detection
                .pubspec_dependencies
                .iter()
                .any(|dep| dependencies.contains(*dep))
        })
        .collect())
}
