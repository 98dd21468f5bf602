use clap::Subcommand;

/// Graph visibility commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GraphCommands {
    /// Show the effective visibility (defaults merged with saved preferences).
    Show,
    /// Change and persist one or more graphs, e.g. `contour=true edf=off`.
    Set {
        #[arg(required = true)]
        assignments: Vec<String>,
    },
    /// Forget saved preferences.
    Reset,
}
