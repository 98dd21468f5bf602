use clap::Subcommand;

/// Single-study commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudyCommands {
    /// Fetch full study state.
    Get { id: u64 },
    /// List the trials of a study.
    Trials {
        id: u64,
        /// Only trials in this state (e.g. complete, running).
        #[arg(long)]
        state: Option<String>,
    },
    /// Create a study.
    Create {
        #[arg(long)]
        name: String,
        /// One per objective: minimize or maximize.
        #[arg(long = "direction", required = true)]
        directions: Vec<String>,
    },
    /// Delete a study.
    Delete { id: u64 },
    /// Poll a study and print trial counts after every refresh.
    Watch {
        id: u64,
        /// Seconds between refreshes (defaults to `general.refresh_interval_secs`).
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many refreshes.
        #[arg(long)]
        iterations: Option<u32>,
    },
}
