//! Async runtime bridge - file IO off the render loop.
//!
//! Tasks run on a tokio runtime and report back over a std mpsc channel the
//! workbench drains each tick. Errors travel as strings; the kernel decides
//! how to surface them.

use std::path::PathBuf;
use std::sync::mpsc;
use tokio::runtime::Runtime;

use super::storage;
use crate::kernel::Project;

#[derive(Debug)]
pub enum AsyncResult {
    ProjectsLoaded {
        result: Result<Vec<Project>, String>,
    },
    ProjectsSaved {
        result: Result<(), String>,
    },
    ProjectImported {
        path: PathBuf,
        result: Result<Project, String>,
    },
    ProjectExported {
        path: PathBuf,
        result: Result<(), String>,
    },
}

pub struct AsyncRuntime {
    runtime: Runtime,
    tx: mpsc::Sender<AsyncResult>,
    rx: mpsc::Receiver<AsyncResult>,
}

impl AsyncRuntime {
    pub fn new() -> std::io::Result<Self> {
        let runtime = Runtime::new()?;
        let (tx, rx) = mpsc::channel();
        Ok(Self { runtime, tx, rx })
    }

    pub fn try_recv(&self) -> Option<AsyncResult> {
        self.rx.try_recv().ok()
    }

    /// Load the autosaved project list. A missing file is an empty list,
    /// not an error.
    pub fn load_projects(&self, path: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = match tokio::fs::read_to_string(&path).await {
                Ok(data) => storage::parse_projects(&data).map_err(|e| e.to_string()),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
                Err(err) => Err(err.to_string()),
            };
            let _ = tx.send(AsyncResult::ProjectsLoaded { result });
        });
    }

    pub fn save_projects(&self, path: PathBuf, projects: Vec<Project>) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = match storage::serialize_projects(&projects) {
                Ok(data) => tokio::fs::write(&path, data)
                    .await
                    .map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            let _ = tx.send(AsyncResult::ProjectsSaved { result });
        });
    }

    pub fn import_project(&self, path: PathBuf) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = match tokio::fs::read_to_string(&path).await {
                Ok(data) => storage::parse_project(&data).map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            let _ = tx.send(AsyncResult::ProjectImported { path, result });
        });
    }

    pub fn export_project(&self, path: PathBuf, project: Project) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = match storage::serialize_project(&project) {
                Ok(data) => tokio::fs::write(&path, data)
                    .await
                    .map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            let _ = tx.send(AsyncResult::ProjectExported { path, result });
        });
    }
}
