use clap::Subcommand;

/// Study note commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NoteCommands {
    /// Show the current note of a study.
    Get { id: u64 },
    /// Save a note. Fails with the server's note on a version conflict.
    Save {
        id: u64,
        #[arg(long)]
        body: String,
        /// Version to save as. Defaults to the current version + 1.
        #[arg(long)]
        version: Option<u64>,
    },
}
