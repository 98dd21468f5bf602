use crate::cli::GlobalFlags;
use crate::commands::shared::emit::emit_one;
use crate::commands::shared::fetch::refresh_detail;
use crate::context::AppContext;
use crate::output::rows::StudyOverview;

pub async fn handle(id: u64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let detail = refresh_detail(ctx, id).await?;
    emit_one(&detail, flags.format, |detail| StudyOverview::from(detail))
}
