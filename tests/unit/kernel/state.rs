use super::*;
use crate::kernel::layout::{Account, AccountKind, Notation};
use crate::kernel::project::Project;

fn state_with_project() -> AppState {
    let mut state = AppState::new();
    let mut project = Project::new("p1");
    project
        .accounts
        .push(Account::new("vault", AccountKind::SplToken));
    state.projects.push(project);
    state.projects.push(Project::new("p2"));
    state
}

#[test]
fn activate_project_loads_working_copy_and_resets_selection() {
    let mut state = state_with_project();
    state.ui.selected_row = 3;
    state.ui.output_scroll = 9;

    assert!(state.activate_project(0));

    assert_eq!(state.current, Some(0));
    assert_eq!(state.accounts.len(), 1);
    assert_eq!(state.ui.selected_row, 0);
    assert_eq!(state.ui.output_scroll, 0);
}

#[test]
fn activate_out_of_range_is_refused() {
    let mut state = state_with_project();
    assert!(!state.activate_project(5));
    assert_eq!(state.current, None);
}

#[test]
fn snapshot_folds_working_copy_into_current_project() {
    let mut state = state_with_project();
    state.activate_project(1);
    state.accounts.push(Account::new("fee", AccountKind::System));
    state.notation = Notation::C;

    assert!(state.snapshot_current());
    assert_eq!(state.projects[1].accounts.len(), 1);
    assert_eq!(state.projects[1].notation, Notation::C);

    // Second snapshot with no edits reports no change.
    assert!(!state.snapshot_current());
}

#[test]
fn snapshot_without_current_project_is_a_noop() {
    let mut state = AppState::new();
    state.accounts.push(Account::new("x", AccountKind::System));
    assert!(!state.snapshot_current());
}
