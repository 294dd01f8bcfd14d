use std::path::PathBuf;

use anyhow::{Result, bail};
use colored::Colorize;

use super::super::args::FrameworksCommand;
use super::{CommandResult, CommandSummary, FrameworkEntry, FrameworksSummary, helper::finish};
use crate::{
    config::load_config,
    core::frameworks::{all_frameworks, detect_frameworks, framework_by_id},
};

pub fn frameworks(cmd: &FrameworksCommand) -> Result<CommandResult> {
    let root_dir = cmd.common.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = load_config(&root_dir)?.config;
    let override_id = cmd.common.framework.as_deref().or(config.framework.as_deref());
    if let Some(id) = override_id
        && framework_by_id(id).is_none()
    {
        bail!("Unknown framework: \"{}\"", id);
    }

    let detected = match detect_frameworks(&root_dir) {
        Ok(found) => found,
        Err(e) => {
            eprintln!("{} {:#}", "warning:".bold().yellow(), e);
            Vec::new()
        }
    };
    let active_id = override_id.or_else(|| {
        detected
            .iter()
            .find(|f| f.applies_to("dart"))
            .map(|f| f.id)
    });

    let entries = all_frameworks()
        .iter()
        .map(|f| FrameworkEntry {
            id: f.id,
            display: f.display,
            detected: detected.iter().any(|d| d.id == f.id),
            active: active_id == Some(f.id),
            usage_patterns: f.usage_patterns(),
        })
        .collect();

    Ok(finish(
        CommandSummary::Frameworks(FrameworksSummary { entries }),
        Vec::new(),
        0,
        true,
    ))
}
