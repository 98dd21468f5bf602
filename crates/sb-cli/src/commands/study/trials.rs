use sb_core::{Trial, TrialState};

use crate::cli::GlobalFlags;
use crate::commands::shared::emit::emit_list;
use crate::commands::shared::fetch::refresh_detail;
use crate::commands::shared::limit::take_limited;
use crate::context::AppContext;
use crate::output::rows::TrialRow;

pub async fn handle(
    id: u64,
    state: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let detail = refresh_detail(ctx, id).await?;

    let trials = match state {
        Some(raw) => {
            let Ok(wanted) = raw.parse::<TrialState>();
            filter_by_state(detail.trials, &wanted)
        }
        None => detail.trials,
    };

    let limit = flags.limit.and_then(|limit| usize::try_from(limit).ok());
    emit_list(take_limited(&trials, limit), flags.format, |trial| TrialRow::from(trial))
}

fn filter_by_state(trials: Vec<Trial>, wanted: &TrialState) -> Vec<Trial> {
    trials
        .into_iter()
        .filter(|trial| trial.state == *wanted)
        .collect()
}
