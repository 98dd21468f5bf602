use anyhow::Context;
use sb_core::StudyDirection;

use crate::cli::GlobalFlags;
use crate::commands::shared::emit::emit_one;
use crate::context::AppContext;
use crate::output::rows::SummaryRow;

pub async fn handle(
    name: &str,
    directions: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let directions = directions
        .iter()
        .map(|raw| raw.parse::<StudyDirection>())
        .collect::<Result<Vec<_>, _>>()?;

    let updates = ctx.store().subscribe_study_summaries();
    ctx.actions.create_new_study(name, &directions).await;
    if !updates.has_changed().unwrap_or(false) {
        anyhow::bail!("failed to create study '{name}'");
    }

    let created = ctx
        .store()
        .study_summaries()
        .pop()
        .context("created study missing from the study list")?;
    emit_one(&created, flags.format, |summary| SummaryRow::from(summary))
}
