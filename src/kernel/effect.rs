use std::path::PathBuf;

use super::project::Project;

/// Side requests the store returns instead of performing IO itself. The
/// workbench executes them through the async runtime.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Persist the full project list to the data directory.
    SaveProjects(Vec<Project>),
    /// Read and parse a project file, then dispatch the result back.
    ImportProject(PathBuf),
    /// Write one project as pretty JSON.
    ExportProject { path: PathBuf, project: Project },
}
