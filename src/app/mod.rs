//! Application layer: the workbench owns the store, views and services.

pub mod theme;
pub mod workbench;

pub use theme::UiTheme;
pub use workbench::{EventResult, Workbench, AUTOSAVE_DELAY};
