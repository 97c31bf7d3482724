use super::*;
use crate::kernel::layout::{Account, AccountKind, Notation};
use tempfile::tempdir;

#[test]
fn projects_round_trip_through_the_autosave_format() {
    let mut project = Project::new("Escrow");
    project
        .accounts
        .push(Account::new("vault", AccountKind::SplToken));
    project.notation = Notation::C;

    let data = serialize_projects(&[project.clone()]).unwrap();
    let back = parse_projects(&data).unwrap();
    assert_eq!(back, vec![project]);
}

#[test]
fn malformed_autosave_file_is_an_error_not_a_panic() {
    assert!(parse_projects("{ not json").is_err());
    assert!(parse_projects("42").is_err());
    assert!(parse_projects("").is_err());
}

#[test]
fn empty_array_parses_to_no_projects() {
    assert!(parse_projects("[]").unwrap().is_empty());
}

#[test]
fn import_reads_a_file_written_by_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("demo.json");

    let mut project = Project::new("Demo");
    project
        .accounts
        .push(Account::new("mint", AccountKind::SplMint));
    std::fs::write(&path, serialize_project(&project).unwrap()).unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    let back = parse_project(&data).unwrap();
    assert_eq!(back, project);
}

#[test]
fn import_accepts_the_original_tool_format() {
    let json = r#"{
        "id": 5,
        "name": "Legacy",
        "accounts": [{"name": "a", "type": "System", "dataLength": 0}],
        "language": "C"
    }"#;
    let project = parse_project(json).unwrap();
    assert_eq!(project.notation, Notation::C);
}

#[test]
fn export_is_pretty_printed() {
    let project = Project::new("Demo");
    let data = serialize_project(&project).unwrap();
    assert!(data.contains('\n'));
}
