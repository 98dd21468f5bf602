mod create;
mod delete;
mod get;
mod trials;
mod watch;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudyCommands;
use crate::context::AppContext;

pub async fn handle(
    action: &StudyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudyCommands::Get { id } => get::handle(*id, ctx, flags).await,
        StudyCommands::Trials { id, state } => {
            trials::handle(*id, state.as_deref(), ctx, flags).await
        }
        StudyCommands::Create { name, directions } => {
            create::handle(name, directions, ctx, flags).await
        }
        StudyCommands::Delete { id } => delete::handle(*id, ctx, flags).await,
        StudyCommands::Watch {
            id,
            interval,
            iterations,
        } => watch::handle(*id, *interval, *iterations, ctx, flags).await,
    }
}
