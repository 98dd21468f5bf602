mod graphs;
mod note;
mod study;

pub use graphs::GraphCommands;
pub use note::NoteCommands;
pub use study::StudyCommands;
