use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportancesArgs;
use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::output::output;
use crate::output::rows::importance_rows;

pub async fn handle(
    args: &ImportancesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let updates = ctx.store().subscribe_param_importances();
    ctx.actions.update_param_importances(args.study_id).await;
    if !updates.has_changed().unwrap_or(false) {
        anyhow::bail!("failed to load parameter importances for study {}", args.study_id);
    }

    let importances = ctx
        .store()
        .param_importances(args.study_id)
        .context("parameter importances missing after refresh")?;

    match flags.format {
        OutputFormat::Table => output(&importance_rows(&importances), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&importances, flags.format),
    }
}
