//! Issue types for analysis results.
//!
//! Each issue is self-contained with everything the reporter needs to
//! display it.

use std::cmp::Ordering;

use enum_dispatch::enum_dispatch;

use crate::core::{DetectionResult, SourceContext};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    HardcodedText,
    ReadError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::HardcodedText => write!(f, "hardcoded"),
            Rule::ReadError => write!(f, "read-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Hard-coded, user-facing text that should be localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardcodedTextIssue {
    /// Location of the literal's opening quote.
    pub context: SourceContext,
    pub detection: DetectionResult,
    /// Suggested replacement in the project's localization framework.
    pub hint: Option<String>,
}

impl HardcodedTextIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::HardcodedText
    }

    pub fn text(&self) -> &str {
        &self.detection.text
    }
}

/// Source file that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ReadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ReadError
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    HardcodedText(HardcodedTextIssue),
    ReadError(ReadErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::HardcodedText(_) => HardcodedTextIssue::severity(),
            Issue::ReadError(_) => ReadErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::HardcodedText(_) => HardcodedTextIssue::rule(),
            Issue::ReadError(_) => ReadErrorIssue::rule(),
        }
    }
}

// Issues sort by file, then position, then rule.
impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a_loc, b_loc) = (self.location(), other.location());
        let (a_path, a_line, a_col) = a_loc.position();
        let (b_path, b_line, b_col) = b_loc.position();
        a_path
            .cmp(b_path)
            .then_with(|| a_line.cmp(&b_line))
            .then_with(|| a_col.cmp(&b_col))
            .then_with(|| self.rule().cmp(&other.rule()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (for ReadError - no line context).
    File { path: &'a str },
}

impl ReportLocation<'_> {
    /// `(path, line, col)`; file-level locations report `0:0`.
    pub fn position(&self) -> (&str, usize, usize) {
        match self {
            ReportLocation::Source(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::File { path } => (*path, 0, 0),
        }
    }

    pub fn source_line(&self) -> Option<&str> {
        match self {
            ReportLocation::Source(ctx) => Some(&ctx.source_line),
            ReportLocation::File { .. } => None,
        }
    }
}

/// Trait for types that can be reported to CLI.
///
/// Dispatched on [`Issue`] with `enum_dispatch`.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (text, error, etc.).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }
}

impl Report for HardcodedTextIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.detection.text.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

impl Report for ReadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
