use crate::cli::GlobalFlags;
use crate::commands::shared::emit::emit_list;
use crate::commands::shared::fetch::refresh_summaries;
use crate::commands::shared::limit::{effective_limit, take_limited};
use crate::context::AppContext;
use crate::output::rows::SummaryRow;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    refresh_summaries(ctx).await?;

    let summaries = ctx.store().study_summaries();
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    emit_list(take_limited(&summaries, limit), flags.format, |summary| SummaryRow::from(summary))
}
