use std::process::ExitCode;

use anyhow::Result;

use super::{
    args::{Arguments, Command, OutputFormat},
    commands::{CommandResult, check::check, frameworks::frameworks, init::init, usages::usages},
    exit_status::ExitStatus,
    report,
};

/// Main entry point for the dart-glot CLI.
///
/// Dispatches to the command handler, prints its report and maps the result
/// to an exit status: issues found exit with 1, internal errors surface as
/// `Err` (exit 2 in `main`).
pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let format = output_format(&args);
    let result = run(args)?;
    report::print(&result, format, verbose)?;

    Ok(ExitStatus::from_error_count(result.error_count, result.exit_on_errors).into())
}

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(&cmd),
        Some(Command::Usages(cmd)) => usages(&cmd),
        Some(Command::Frameworks(cmd)) => frameworks(&cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn output_format(args: &Arguments) -> OutputFormat {
    match &args.command {
        Some(Command::Check(cmd)) => cmd.format,
        Some(Command::Usages(cmd)) => cmd.format,
        _ => OutputFormat::Text,
    }
}
