pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;
pub mod run;

pub use args::{Arguments, Command, CommonArgs, OutputFormat};
pub use exit_status::ExitStatus;
pub use run::run_cli;
