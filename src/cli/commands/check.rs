use anyhow::{Ok, Result};

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{checks::hardcoded::check_hardcoded_text_issues, core::CheckContext, issues::Issue};

pub fn check(cmd: &CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let mut issues: Vec<Issue> = check_hardcoded_text_issues(&ctx)
        .into_iter()
        .map(Issue::HardcodedText)
        .collect();
    issues.extend(ctx.read_errors().iter().cloned().map(Issue::ReadError));

    Ok(finish(CommandSummary::Check, issues, ctx.files.len(), true))
}
