use std::{
    cell::OnceCell,
    collections::BTreeSet,
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        file_scanner::{ScanFilter, scan_files},
        frameworks::{FrameworkUsageModel, detect_frameworks, framework_by_id},
        parsers::language_for_path,
    },
    issues::ReadErrorIssue,
};

/// A source file read into memory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path as displayed in reports.
    pub path: String,
    pub language_id: &'static str,
    pub content: String,
}

/// Every scanned file that could be read, plus the ones that could not.
#[derive(Debug, Default)]
pub struct SourceFiles {
    pub files: Vec<SourceFile>,
    pub errors: Vec<ReadErrorIssue>,
}

/// Everything a command needs to analyze one project.
pub struct CheckContext {
    pub config: Config,
    pub root_dir: PathBuf,
    /// Files selected by the scan, sorted.
    pub files: BTreeSet<String>,
    pub verbose: bool,
    /// Framework whose conventions mark text as localized, if any.
    pub framework: Option<&'static FrameworkUsageModel>,

    /// Read lazily on first access, in parallel.
    sources: OnceCell<SourceFiles>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// Loads configuration (CLI args > config file > defaults), picks the
    /// framework and scans source files. File contents are read on demand.
    ///
    /// # Errors
    ///
    /// Returns error if the project directory does not exist, the config file
    /// is invalid or the framework override names an unknown framework.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        if !root_dir.is_dir() {
            bail!("Project directory not found: {}", root_dir.display());
        }

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(ref framework) = common_args.framework {
            config.framework = Some(framework.clone());
        }

        let framework = select_framework(&config, &root_dir)?;
        if verbose {
            match framework {
                Some(f) => eprintln!("{} Using framework {}", "note:".bold(), f.display),
                None => eprintln!("{} No localization framework detected", "note:".bold()),
            }
        }

        let scan_root = resolve_source_root(&root_dir, &config.source_root);
        let scan_result = scan_files(
            &scan_root,
            &ScanFilter {
                includes: &config.includes,
                ignores: &config.ignores,
                ignore_test_files: config.ignore_test_files,
                ignore_generated_files: config.ignore_generated_files,
            },
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            framework,
            sources: OnceCell::new(),
        })
    }

    /// Contents of every scanned file.
    ///
    /// Files are read in parallel. A file that cannot be read (missing,
    /// not UTF-8) becomes a [`ReadErrorIssue`] instead.
    pub fn source_files(&self) -> &SourceFiles {
        self.sources.get_or_init(|| {
            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| (file_path, read_source_file(file_path)))
                .collect();

            let mut sources = SourceFiles::default();
            for (file_path, result) in results {
                match result {
                    Ok(Some(file)) => sources.files.push(file),
                    Ok(None) => {}
                    Err(e) => {
                        if self.verbose {
                            eprintln!("{} {} - {:#}", "warning:".bold().yellow(), file_path, e);
                        }
                        sources.errors.push(ReadErrorIssue {
                            file_path: display_path(file_path),
                            error: format!("{:#}", e),
                        });
                    }
                }
            }
            sources
        })
    }

    pub fn read_errors(&self) -> &[ReadErrorIssue] {
        &self.source_files().errors
    }
}

/// The framework named by config, else the first one detected from
/// `pubspec.yaml` that applies to Dart.
fn select_framework(
    config: &Config,
    root_dir: &Path,
) -> Result<Option<&'static FrameworkUsageModel>> {
    if let Some(ref id) = config.framework {
        let framework =
            framework_by_id(id).with_context(|| format!("Unknown framework: \"{}\"", id))?;
        return Ok(Some(framework));
    }

    match detect_frameworks(root_dir) {
        Ok(found) => Ok(found.into_iter().find(|f| f.applies_to("dart"))),
        Err(e) => {
            eprintln!(
                "{} {:#}, framework detection skipped",
                "warning:".bold().yellow(),
                e
            );
            Ok(None)
        }
    }
}

fn resolve_source_root(root_dir: &Path, source_root: &str) -> PathBuf {
    let source_root = Path::new(source_root);
    if source_root.is_absolute() {
        return source_root.to_path_buf();
    }
    let relative: PathBuf = source_root
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if relative.as_os_str().is_empty() {
        root_dir.to_path_buf()
    } else {
        root_dir.join(relative)
    }
}

fn read_source_file(file_path: &str) -> Result<Option<SourceFile>> {
    let Some(language_id) = language_for_path(Path::new(file_path)) else {
        return Ok(None);
    };
    let content = fs::read_to_string(file_path).context("Failed to read file")?;
    Ok(Some(SourceFile {
        path: display_path(file_path),
        language_id,
        content,
    }))
}

/// Drop a leading `./` so reported paths read like the ones users type.
fn display_path(file_path: &str) -> String {
    let path = Path::new(file_path);
    path.strip_prefix(".")
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
