use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    id: u64,
    deleted: bool,
}

pub async fn handle(id: u64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let updates = ctx.store().subscribe_study_summaries();
    ctx.actions.delete_study(id).await;
    if !updates.has_changed().unwrap_or(false) {
        anyhow::bail!("failed to delete study {id}");
    }
    output(&DeleteResponse { id, deleted: true }, flags.format)
}
