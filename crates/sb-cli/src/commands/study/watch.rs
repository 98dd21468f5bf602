use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct WatchTick {
    iteration: u32,
    trials: usize,
    states: BTreeMap<String, usize>,
}

/// Refresh a study until interrupted, printing trial counts after each pass.
///
/// Only the first refresh downloads every trial; later ones ask for the
/// trials after the settled prefix. A failed refresh keeps the last state.
pub async fn handle(
    id: u64,
    interval: Option<u64>,
    iterations: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let interval = interval.unwrap_or(ctx.config.general.refresh_interval_secs);
    if interval == 0 {
        anyhow::bail!("--interval must be greater than zero");
    }
    let interval = Duration::from_secs(interval);

    let mut iteration = 0u32;
    loop {
        iteration += 1;
        ctx.actions.update_study_detail(id).await;

        match ctx.store().study_detail(id) {
            Some(detail) => print_tick(
                &WatchTick {
                    iteration,
                    trials: detail.trials.len(),
                    states: detail.trial_counts(),
                },
                flags.format,
            )?,
            None => tracing::warn!(study_id = id, iteration, "study not loaded yet"),
        }

        if iterations.is_some_and(|limit| iteration >= limit) {
            return Ok(());
        }

        tokio::select! {
            () = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }
    }
}

fn print_tick(tick: &WatchTick, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            println!(
                "[{}] {} trials  {}",
                tick.iteration,
                tick.trials,
                format_states(&tick.states)
            );
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(tick, OutputFormat::Raw),
    }
}

fn format_states(states: &BTreeMap<String, usize>) -> String {
    states
        .iter()
        .map(|(state, count)| format!("{state}={count}"))
        .collect::<Vec<_>>()
        .join(" ")
}
