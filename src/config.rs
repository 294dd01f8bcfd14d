use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{
    frameworks::framework_by_id,
    parsers::{DEFAULT_LOOKAHEAD, ExtractionOptions},
    rules::{IgnoreTextsRule, RuleSet, default_dynamic_rules, default_rules},
};

pub const CONFIG_FILE_NAME: &str = ".dartglotrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*_test.dart",
    "**/test/**",
    "**/integration_test/**",
    "**/test_driver/**",
];

pub const GENERATED_FILE_PATTERNS: &[&str] = &["**/*.g.dart", "**/*.freezed.dart", "**/*.gr.dart"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_true")]
    pub ignore_test_files: bool,
    #[serde(default = "default_true")]
    pub ignore_generated_files: bool,
    /// Framework id to use instead of detecting it from `pubspec.yaml`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    /// Characters after a literal searched for a localization call.
    #[serde(default = "default_lookahead")]
    pub lookahead: usize,
}

fn default_includes() -> Vec<String> {
    vec!["lib".to_string()]
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_true() -> bool {
    true
}

fn default_lookahead() -> usize {
    DEFAULT_LOOKAHEAD
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: default_includes(),
            ignore_texts: Vec::new(),
            source_root: default_source_root(),
            ignore_test_files: true,
            ignore_generated_files: true,
            framework: None,
            lookahead: default_lookahead(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns, an unknown framework id or
    /// a zero lookahead.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if let Some(id) = &self.framework
            && framework_by_id(id).is_none()
        {
            bail!("Unknown framework in 'framework': \"{}\"", id);
        }

        if self.lookahead == 0 {
            bail!("'lookahead' must be greater than 0");
        }

        Ok(())
    }

    /// Static extraction rules, with `ignoreTexts` checked first.
    pub fn extraction_rules(&self) -> RuleSet {
        self.with_ignore_texts(default_rules())
    }

    /// Rules for interpolated literals, with `ignoreTexts` checked first.
    pub fn extraction_dynamic_rules(&self) -> RuleSet {
        self.with_ignore_texts(default_dynamic_rules())
    }

    fn with_ignore_texts(&self, defaults: RuleSet) -> RuleSet {
        let ignore_texts = IgnoreTextsRule::new(self.ignore_texts.iter().cloned());
        let mut rules: RuleSet = Vec::new();
        if !ignore_texts.is_empty() {
            rules.push(Box::new(ignore_texts));
        }
        rules.extend(defaults);
        rules
    }

    pub fn extraction_options(&self) -> ExtractionOptions {
        ExtractionOptions {
            lookahead: self.lookahead,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
