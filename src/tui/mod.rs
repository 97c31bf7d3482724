//! Terminal integration (crossterm + ratatui).
//!
//! Kept separate from `kernel` so the core builds without terminal crates.

pub mod terminal_guard;

pub use terminal_guard::{CrosstermTerminalOps, TerminalGuard, TerminalOps};
