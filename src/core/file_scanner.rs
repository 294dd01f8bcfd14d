use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::{GENERATED_FILE_PATTERNS, TEST_FILE_PATTERNS};
use crate::core::parsers::language_for_path;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Which files a scan picks up.
#[derive(Debug, Clone, Default)]
pub struct ScanFilter<'a> {
    pub includes: &'a [String],
    pub ignores: &'a [String],
    pub ignore_test_files: bool,
    pub ignore_generated_files: bool,
}

/// Result of scanning files.
pub struct ScanResult {
    /// Source files with a registered scanner, sorted.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

pub fn scan_files(base_dir: &Path, filter: &ScanFilter<'_>, verbose: bool) -> ScanResult {
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in filter.ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let mut builtin: Vec<&str> = Vec::new();
    if filter.ignore_test_files {
        builtin.extend(TEST_FILE_PATTERNS);
    }
    if filter.ignore_generated_files {
        builtin.extend(GENERATED_FILE_PATTERNS);
    }
    glob_patterns.extend(builtin.into_iter().filter_map(|p| Pattern::new(p).ok()));

    let dirs_to_scan = resolve_includes(base_dir, filter.includes, verbose);

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            // Globs match the project-relative path, so a project living under
            // a directory named `test` is not ignored wholesale.
            let relative = path.strip_prefix(base_dir).unwrap_or(path);
            let relative_str = relative.to_string_lossy();
            if glob_patterns.iter().any(|p| p.matches(&relative_str)) {
                continue;
            }

            if path.is_file() && language_for_path(path).is_some() {
                files.insert(path.to_string_lossy().into());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn resolve_includes(base_dir: &Path, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut paths = Vec::new();
    for inc in includes {
        if is_glob_pattern(inc) {
            let full_pattern = base_dir.join(inc);
            match glob(&full_pattern.to_string_lossy()) {
                Ok(entries) => paths.extend(entries.flatten().filter(|e| e.is_dir())),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid glob pattern '{}': {}",
                            "warning:".bold().yellow(),
                            inc,
                            e
                        );
                    }
                }
            }
        } else {
            let path = base_dir.join(inc);
            if path.exists() {
                paths.push(path);
            } else if verbose {
                eprintln!(
                    "{} Include path does not exist: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
        }
    }
    paths
}
