//! svmcalc - interactive SVM program-input offset calculator.
//!
//! Module structure:
//! - kernel: headless core (state, actions, effects, offset layout engine)
//! - services: storage paths, project persistence, async IO bridge
//! - app: workbench (store + views + effects + autosave debounce)
//! - views: pure-render TUI views
//! - tui: terminal setup/restore

pub mod kernel;
pub mod logging;
pub mod services;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
#[cfg(feature = "tui")]
pub mod views;
