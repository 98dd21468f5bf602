use clap::{Args, Subcommand};

use crate::cli::subcommands::{GraphCommands, NoteCommands, StudyCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch and list study summaries.
    Studies,
    /// Single-study operations.
    Study {
        #[command(subcommand)]
        action: StudyCommands,
    },
    /// Study notes.
    Note {
        #[command(subcommand)]
        action: NoteCommands,
    },
    /// Graph visibility preferences.
    Graphs {
        #[command(subcommand)]
        action: GraphCommands,
    },
    /// Parameter importances of a study, one table per objective.
    Importances(ImportancesArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ImportancesArgs {
    pub study_id: u64,
}
