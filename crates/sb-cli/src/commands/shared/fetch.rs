//! Run an action and turn "the store did not change" into a command error.
//!
//! Actions report failures through notifications only. A command needs an
//! exit status as well, so it watches the container the action writes to.

use anyhow::Context;
use sb_core::{StudyDetail, StudyId};

use crate::context::AppContext;

/// Refresh one study and return its merged state.
pub async fn refresh_detail(ctx: &AppContext, study_id: StudyId) -> anyhow::Result<StudyDetail> {
    let updates = ctx.store().subscribe_study_details();
    ctx.actions.update_study_detail(study_id).await;
    if !updates.has_changed().unwrap_or(false) {
        anyhow::bail!("failed to fetch study {study_id}");
    }
    ctx.store()
        .study_detail(study_id)
        .with_context(|| format!("study {study_id} missing after refresh"))
}

/// Refresh the study list.
pub async fn refresh_summaries(ctx: &AppContext) -> anyhow::Result<()> {
    let updates = ctx.store().subscribe_study_summaries();
    ctx.actions.update_study_summaries(None).await;
    if !updates.has_changed().unwrap_or(false) {
        anyhow::bail!("failed to fetch study list");
    }
    Ok(())
}
