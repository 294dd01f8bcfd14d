use std::process::ExitCode;

/// Process exit status of `dart-glot`.
///
/// `0` nothing to report, `1` issues found, `2` the command itself failed
/// (bad config, unreadable project directory, unknown framework).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a command that completed with `error_count` errors.
    pub fn from_error_count(error_count: usize, exit_on_errors: bool) -> Self {
        if exit_on_errors && error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
