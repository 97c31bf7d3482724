use std::path::PathBuf;

use super::layout::Notation;
use super::project::Project;

/// Everything the UI (or the async bridge) can ask the kernel to do.
#[derive(Debug, Clone)]
pub enum Action {
    // Account table
    AddAccount,
    RemoveSelected,
    MoveSelection {
        delta: isize,
    },
    MoveColumn {
        delta: isize,
    },
    /// Open the selected cell for editing (Name/DataLen) or cycle it (Kind).
    BeginEdit,
    CycleKind,

    // Shared text input: routed to the cell edit buffer or the prompt,
    // whichever is open.
    InputChar(char),
    InputBackspace,
    Commit,
    Cancel,

    // Notation
    SetNotation(Notation),
    NextNotation,

    // Output panel
    ScrollOutput {
        delta: isize,
    },

    // Project sidebar
    ToggleSidebar,
    SidebarMoveSelection {
        delta: isize,
    },
    SidebarActivate,

    // Projects
    OpenImportPrompt,
    OpenProjectPrompt,
    ExportProject,
    /// Fold the working copy into the current project and request a save.
    Autosave,

    // Async bridge results
    ProjectsLoaded(Vec<Project>),
    ProjectImported {
        path: PathBuf,
        project: Project,
    },
    ImportFailed {
        path: PathBuf,
        error: String,
    },
    StatusMessage(String),

    Tick,
}
