//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow dart-glot to be used as a library.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, FrameworksSummary, InitSummary, UsagesSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::DetectionResult;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no issues found",
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print a warning about files that could not be read.
pub fn print_read_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

/// One issue as emitted by `--format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord<'a> {
    pub rule: String,
    pub severity: String,
    pub file: &'a str,
    pub line: usize,
    pub col: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'a str>,
    #[serde(flatten)]
    pub detection: Option<&'a DetectionResult>,
}

impl<'a> IssueRecord<'a> {
    pub fn from_issue(issue: &'a Issue) -> Self {
        let (file, line, col) = match issue {
            Issue::HardcodedText(i) => (i.context.file_path(), i.context.line(), i.context.col()),
            Issue::ReadError(i) => (i.file_path.as_str(), 0, 0),
        };
        Self {
            rule: issue.rule().to_string(),
            severity: issue.severity().to_string(),
            file,
            line,
            col,
            message: issue.message(),
            hint: issue.hint(),
            detection: match issue {
                Issue::HardcodedText(i) => Some(&i.detection),
                Issue::ReadError(_) => None,
            },
        }
    }
}

/// Print issues as a pretty JSON array.
pub fn report_json_to<W: Write>(issues: &[Issue], writer: &mut W) -> Result<()> {
    let records: Vec<IssueRecord> = issues.iter().map(IssueRecord::from_issue).collect();
    writeln!(writer, "{}", serde_json::to_string_pretty(&records)?)?;
    Ok(())
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col) = loc.position();

    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    if line > 0 {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }

    if let Some(source_line) = loc.source_line() {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix = if col > 1 {
            source_line.chars().take(col - 1).collect::<String>()
        } else {
            String::new()
        };
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| i.location().source_line().map(|_| i.location().position().1))
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Command Output
// ============================================================

pub fn print(result: &CommandResult, format: OutputFormat, verbose: bool) -> Result<()> {
    let stdout = &mut io::stdout().lock();

    match &result.summary {
        CommandSummary::Check => match format {
            OutputFormat::Json => report_json_to(&result.issues, stdout)?,
            OutputFormat::Text => {
                report_to(&result.issues, stdout);
                if result.issues.is_empty() {
                    print_success_to(result.source_files_checked, stdout);
                }
            }
        },
        CommandSummary::Usages(summary) => {
            print_usages_to(summary, format, stdout)?;
            if format == OutputFormat::Text {
                report_to(&result.issues, stdout);
            }
        }
        CommandSummary::Frameworks(summary) => print_frameworks_to(summary, verbose, stdout),
        CommandSummary::Init(summary) => print_init(summary),
    }

    print_read_warning_to(result.read_error_count, verbose, &mut io::stderr().lock());
    Ok(())
}

fn print_usages_to<W: Write>(
    summary: &UsagesSummary,
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    if format == OutputFormat::Json {
        let records: Vec<_> = summary.usages.iter().map(|u| u.record()).collect();
        writeln!(writer, "{}", serde_json::to_string_pretty(&records)?)?;
        return Ok(());
    }

    let Some(framework) = summary.framework else {
        eprintln!(
            "{} No localization framework detected (set \"framework\" in {} or pass {})",
            "warning:".bold().yellow(),
            CONFIG_FILE_NAME,
            "--framework".cyan()
        );
        return Ok(());
    };

    for usage in &summary.usages {
        writeln!(
            writer,
            "{}:{}:{}  {}  {}",
            usage.context.file_path(),
            usage.context.line(),
            usage.context.col(),
            usage.key.bold(),
            usage.usage.dimmed()
        )?;
    }

    let file_count = summary
        .usages
        .iter()
        .map(|u| u.context.file_path())
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Found {} key {} in {} {} ({})",
            summary.usages.len(),
            if summary.usages.len() == 1 {
                "usage"
            } else {
                "usages"
            },
            file_count,
            if file_count == 1 { "file" } else { "files" },
            framework
        )
        .green()
    )?;
    Ok(())
}

fn print_frameworks_to<W: Write>(summary: &FrameworksSummary, verbose: bool, writer: &mut W) {
    let id_width = summary
        .entries
        .iter()
        .map(|e| e.id.len())
        .max()
        .unwrap_or(0);

    for entry in &summary.entries {
        let status = match (entry.active, entry.detected) {
            (true, _) => "active".green(),
            (false, true) => "detected".yellow(),
            (false, false) => "not detected".dimmed(),
        };
        let _ = writeln!(
            writer,
            "{:<width$}  {}  {}",
            entry.id,
            entry.display,
            status,
            width = id_width
        );
        if verbose {
            for pattern in &entry.usage_patterns {
                let _ = writeln!(writer, "  {} {}", "=".blue(), pattern);
            }
        }
    }
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        Some(error) => eprintln!("{}: {}", "error".bold().red(), error),
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        ),
    }
}
