use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Studies => commands::studies::handle(ctx, flags).await,
        Commands::Study { action } => commands::study::handle(&action, ctx, flags).await,
        Commands::Note { action } => commands::note::handle(&action, ctx, flags).await,
        Commands::Graphs { action } => commands::graphs::handle(&action, ctx, flags),
        Commands::Importances(args) => commands::importances::handle(&args, ctx, flags).await,
    }
}
