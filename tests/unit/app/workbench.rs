use super::*;
use crate::kernel::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

fn new_workbench() -> Workbench {
    Workbench::new(AsyncRuntime::new().unwrap())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

#[test]
fn ctrl_q_quits() {
    let mut wb = new_workbench();
    assert!(wb.handle_key(ctrl('q')).is_quit());
}

#[test]
fn plain_keys_drive_the_account_table() {
    let mut wb = new_workbench();
    assert_eq!(wb.handle_key(key(KeyCode::Char('a'))), EventResult::Consumed);
    assert_eq!(wb.state().accounts.len(), 1);

    wb.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(wb.state().accounts[0].data_len, 165);

    wb.handle_key(key(KeyCode::Char('d')));
    assert!(wb.state().accounts.is_empty());
}

#[test]
fn digits_switch_notation_unless_a_cell_is_being_edited() {
    let mut wb = new_workbench();
    wb.handle_key(key(KeyCode::Char('2')));
    assert_eq!(wb.state().notation, crate::kernel::Notation::Rust);

    wb.handle_key(key(KeyCode::Char('a')));
    wb.handle_key(key(KeyCode::Enter)); // edit the name cell
    wb.handle_key(key(KeyCode::Char('3')));

    assert_eq!(wb.state().notation, crate::kernel::Notation::Rust);
    assert_eq!(wb.state().ui.edit.as_deref(), Some("ACCOUNT13"));
}

#[test]
fn autosave_is_armed_only_while_a_project_is_active() {
    let mut wb = new_workbench();
    wb.dispatch(Action::AddAccount);
    assert!(wb.autosave_deadline.is_none());

    wb.dispatch(Action::OpenProjectPrompt);
    for ch in "Demo".chars() {
        wb.dispatch(Action::InputChar(ch));
    }
    wb.dispatch(Action::Commit);
    assert!(wb.autosave_deadline.is_some());
}

#[test]
fn every_change_re_arms_the_pending_autosave() {
    let mut wb = new_workbench();
    wb.dispatch(Action::OpenProjectPrompt);
    wb.dispatch(Action::InputChar('p'));
    wb.dispatch(Action::Commit);

    let first = wb.autosave_deadline.unwrap();
    wb.dispatch(Action::AddAccount);
    let second = wb.autosave_deadline.unwrap();
    assert!(second >= first);
}

#[test]
fn due_autosave_fires_once() {
    let mut wb = new_workbench();
    wb.dispatch(Action::OpenProjectPrompt);
    wb.dispatch(Action::InputChar('p'));
    wb.dispatch(Action::Commit);

    wb.autosave_deadline = Some(Instant::now());
    wb.poll_autosave();
    assert!(wb.autosave_deadline.is_none());

    // Nothing pending: another poll is a no-op.
    wb.poll_autosave();
    assert!(wb.autosave_deadline.is_none());
}

#[test]
fn import_failure_reports_status_and_keeps_state() {
    let mut wb = new_workbench();
    wb.dispatch(Action::AddAccount);

    wb.handle_async(AsyncResult::ProjectImported {
        path: "missing.json".into(),
        result: Err("No such file or directory".into()),
    });

    assert_eq!(wb.state().accounts.len(), 1);
    assert!(wb
        .state()
        .ui
        .status
        .as_deref()
        .unwrap()
        .contains("missing.json"));
}
