use super::*;
use crate::kernel::layout::{Account, AccountKind, Notation};

#[test]
fn parses_files_exported_by_the_original_tool() {
    let json = r#"{
        "id": 1730000000000,
        "name": "Escrow",
        "accounts": [
            {"name": "vault", "type": "SPL Token", "dataLength": 165},
            {"name": "authority", "type": "System", "dataLength": 0}
        ],
        "language": "Rust"
    }"#;

    let project: Project = serde_json::from_str(json).unwrap();
    assert_eq!(project.name, "Escrow");
    assert_eq!(project.accounts.len(), 2);
    assert_eq!(project.accounts[0].kind, AccountKind::SplToken);
    assert_eq!(project.accounts[0].data_len, 165);
    assert_eq!(project.notation, Notation::Rust);
}

#[test]
fn missing_fields_default() {
    let project: Project = serde_json::from_str(r#"{"name": "Bare"}"#).unwrap();
    assert!(project.accounts.is_empty());
    assert_eq!(project.notation, Notation::Asm);
    assert!(project.id > 0);
}

#[test]
fn exports_under_the_notation_key() {
    let project = Project::new("Demo");
    let json = serde_json::to_string(&project).unwrap();
    assert!(json.contains("\"notation\""));
    assert!(!json.contains("\"language\""));
}

#[test]
fn round_trips_through_json() {
    let mut project = Project::new("Round Trip");
    project.accounts.push(Account::new("vault", AccountKind::SplMint));
    project.notation = Notation::C;

    let json = serde_json::to_string(&project).unwrap();
    let back: Project = serde_json::from_str(&json).unwrap();
    assert_eq!(back, project);
}

#[test]
fn export_file_name_lowercases_and_dashes_whitespace() {
    assert_eq!(
        Project::new("My Project").export_file_name(),
        "my-project.json"
    );
    assert_eq!(
        Project::new("lots   of\tspace").export_file_name(),
        "lots-of-space.json"
    );
    assert_eq!(Project::new("").export_file_name(), "untitled-project.json");
}
