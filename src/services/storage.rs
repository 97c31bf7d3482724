//! Storage paths and project persistence.
//!
//! Cross-platform app data directory, VS Code style:
//! - macOS: ~/Library/Application Support/svmcalc
//! - Linux: $XDG_DATA_HOME/svmcalc or ~/.local/share/svmcalc
//! - Windows: %APPDATA%\svmcalc
//!
//! The project list lives in `projects.json` inside it; this is the
//! local-storage analog of the original web tool. Parse helpers are pure so
//! the async tasks and the tests share them.

use std::path::PathBuf;

use crate::kernel::Project;

const APP_NAME: &str = "svmcalc";
const PROJECTS_FILE: &str = "projects.json";
const LOG_DIR: &str = "logs";

fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        dirs_path_macos()
    }

    #[cfg(target_os = "linux")]
    {
        dirs_path_linux()
    }

    #[cfg(target_os = "windows")]
    {
        dirs_path_windows()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(target_os = "macos")]
fn dirs_path_macos() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join("Library/Application Support")
            .join(APP_NAME)
    })
}

#[cfg(target_os = "linux")]
fn dirs_path_linux() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg).join(APP_NAME))
    } else {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
    }
}

#[cfg(target_os = "windows")]
fn dirs_path_windows() -> Option<PathBuf> {
    std::env::var("APPDATA")
        .ok()
        .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}

/// Path of the autosaved project list, if a data dir can be determined.
pub fn get_projects_path() -> Option<PathBuf> {
    get_app_data_dir().map(|dir| dir.join(PROJECTS_FILE))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|dir| dir.join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Create the data dir and return the projects path.
pub fn ensure_projects_path() -> std::io::Result<PathBuf> {
    let path = get_projects_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine data directory",
        )
    })?;
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(path)
}

/// Parse the autosave file. Errors are the caller's to report; state is
/// never touched on failure.
pub fn parse_projects(data: &str) -> Result<Vec<Project>, serde_json::Error> {
    serde_json::from_str(data)
}

pub fn serialize_projects(projects: &[Project]) -> Result<String, serde_json::Error> {
    serde_json::to_string(projects)
}

/// Parse one exported/imported project file.
pub fn parse_project(data: &str) -> Result<Project, serde_json::Error> {
    serde_json::from_str(data)
}

pub fn serialize_project(project: &Project) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(project)
}

#[cfg(test)]
#[path = "../../tests/unit/services/storage.rs"]
mod tests;
