//! Headless application core (state/action/effect).
//!
//! No terminal crates here; the kernel is driven by `Action`s and answers
//! with state changes plus `Effect` side requests.

pub mod action;
pub mod effect;
pub mod layout;
pub mod project;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use layout::{compute_layout, format_offset, render_entry};
pub use layout::{Account, AccountKind, Notation, OffsetEntry};
pub use project::Project;
pub use state::{AccountColumn, AppState, FocusTarget, PromptKind, PromptState, UiState};
pub use store::{DispatchResult, Store};
