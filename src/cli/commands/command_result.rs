use crate::{checks::key_usages::LocatedKeyUsage, issues::Issue};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Usages(UsagesSummary),
    Frameworks(FrameworksSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct UsagesSummary {
    /// Display name of the framework whose matchers ran.
    pub framework: Option<&'static str>,
    pub usages: Vec<LocatedKeyUsage>,
}

#[derive(Debug)]
pub struct FrameworkEntry {
    pub id: &'static str,
    pub display: &'static str,
    /// Listed in the project's `pubspec.yaml`.
    pub detected: bool,
    /// Chosen for this project (config override or detection).
    pub active: bool,
    pub usage_patterns: Vec<String>,
}

#[derive(Debug)]
pub struct FrameworksSummary {
    pub entries: Vec<FrameworkEntry>,
}

#[derive(Debug)]
pub struct InitSummary {
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running a dart-glot command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of files that could not be read.
    pub read_error_count: usize,
    /// Number of source files that were checked.
    pub source_files_checked: usize,
}
