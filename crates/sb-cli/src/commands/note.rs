use sb_core::Note;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NoteCommands;
use crate::commands::shared::fetch::refresh_detail;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &NoteCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NoteCommands::Get { id } => {
            let detail = refresh_detail(ctx, *id).await?;
            output(&detail.note, flags.format)
        }
        NoteCommands::Save { id, body, version } => {
            let note = match version {
                Some(version) => Note {
                    version: *version,
                    body: body.clone(),
                },
                None => refresh_detail(ctx, *id).await?.note.next(body.as_str()),
            };

            if let Err(error) = ctx.actions.save_note(*id, note.clone()).await {
                if let Some(server) = error.as_api().and_then(|api| api.conflict_note()) {
                    anyhow::bail!(
                        "note conflict: server is at version {} (tried {})",
                        server.version,
                        note.version
                    );
                }
                return Err(error.into());
            }
            output(&note, flags.format)
        }
    }
}
