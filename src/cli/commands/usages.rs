use anyhow::{Ok, Result};

use super::super::args::UsagesCommand;
use super::{CommandResult, CommandSummary, UsagesSummary, helper::finish};
use crate::{checks::key_usages::collect_key_usages, core::CheckContext, issues::Issue};

pub fn usages(cmd: &UsagesCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let usages = collect_key_usages(&ctx)?;

    let issues: Vec<Issue> = ctx
        .read_errors()
        .iter()
        .cloned()
        .map(Issue::ReadError)
        .collect();

    let summary = CommandSummary::Usages(UsagesSummary {
        framework: ctx.framework.map(|f| f.display),
        usages,
    });
    Ok(finish(summary, issues, ctx.files.len(), true))
}
