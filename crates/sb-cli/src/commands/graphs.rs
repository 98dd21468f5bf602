use sb_core::VisibilityAssignment;

use crate::cli::subcommands::GraphCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::output::rows::graph_rows;

pub fn handle(action: &GraphCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        GraphCommands::Show => {}
        GraphCommands::Set { assignments } => {
            let assignments = assignments
                .iter()
                .map(|raw| raw.parse::<VisibilityAssignment>())
                .collect::<Result<Vec<_>, _>>()?;

            let mut visibility = ctx.store().graph_visibility();
            for assignment in assignments {
                visibility.set(assignment.key, assignment.shown);
            }
            ctx.actions.save_graph_visibility(visibility)?;
        }
        GraphCommands::Reset => ctx.actions.reset_graph_visibility()?,
    }

    let visibility = ctx.store().graph_visibility();
    match flags.format {
        OutputFormat::Table => output(&graph_rows(&visibility), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&visibility, flags.format),
    }
}
