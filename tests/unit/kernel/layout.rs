use super::*;

fn account(name: &str, kind: AccountKind) -> Account {
    Account::new(name, kind)
}

fn find(entries: &[OffsetEntry], label: &str) -> i64 {
    entries
        .iter()
        .find(|e| e.label == label)
        .unwrap_or_else(|| panic!("missing label {label}"))
        .offset
}

#[test]
fn empty_list_emits_fixed_and_trailing_labels_only() {
    let entries = compute_layout(&[]);

    let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "NUM_ACCOUNTS",
            "INSTRUCTION_DATA_LEN",
            "INSTRUCTION_DATA",
            "PROGRAM_ID"
        ]
    );
    assert_eq!(entries[0].offset, 0x0000);
    assert_eq!(entries[1].offset, 0x0008);
    assert_eq!(entries[2].offset, 0x0010);
    // Shares INSTRUCTION_DATA's offset.
    assert_eq!(entries[3].offset, 0x0010);
}

#[test]
fn single_system_account_worked_example() {
    let entries = compute_layout(&[account("vault", AccountKind::System)]);

    assert_eq!(find(&entries, "NUM_ACCOUNTS"), 0x0000);
    assert_eq!(find(&entries, "VAULT_HEADER"), 0x0008);
    assert_eq!(find(&entries, "VAULT_KEY"), 0x0010);
    assert_eq!(find(&entries, "VAULT_OWNER"), 0x0030);
    assert_eq!(find(&entries, "VAULT_LAMPORTS"), 0x0050);
    assert_eq!(find(&entries, "VAULT_DATA_LEN"), 0x0058);
    assert_eq!(find(&entries, "VAULT_DATA"), 0x0060);
    assert_eq!(find(&entries, "INSTRUCTION_DATA_LEN"), 0x2868);
    assert_eq!(find(&entries, "INSTRUCTION_DATA"), 0x2870);
    assert_eq!(find(&entries, "PROGRAM_ID"), 0x2870);
}

#[test]
fn unaligned_data_length_is_aligned_before_next_account() {
    let mut first = account("a", AccountKind::System);
    first.data_len = 5;
    let second = account("b", AccountKind::System);

    let entries = compute_layout(&[first, second]);

    // 0x60 + 5 + 10240 + 8 = 10349, rounded up to 10352.
    assert_eq!(find(&entries, "B_HEADER"), 0x2870);
    assert_eq!(find(&entries, "B_HEADER") % 8, 0);
}

#[test]
fn spl_kinds_imply_data_lengths() {
    assert_eq!(AccountKind::System.default_data_len(), 0);
    assert_eq!(AccountKind::SplToken.default_data_len(), 165);
    assert_eq!(AccountKind::SplMint.default_data_len(), 82);
    assert_eq!(AccountKind::Unknown.default_data_len(), 0);

    let token = account("t", AccountKind::SplToken);
    let entries = compute_layout(&[token]);
    // DATA at 0x60, + 165 + 10240 + 8 = 10509, aligned to 10512.
    assert_eq!(find(&entries, "INSTRUCTION_DATA_LEN"), 10512);
}

#[test]
fn label_prefix_is_uppercased_but_not_sanitized() {
    let entries = compute_layout(&[account("my account", AccountKind::System)]);

    for field in ["HEADER", "KEY", "OWNER", "LAMPORTS", "DATA_LEN", "DATA"] {
        assert!(
            entries
                .iter()
                .any(|e| e.label == format!("MY ACCOUNT_{field}")),
            "expected MY ACCOUNT_{field}"
        );
    }
}

#[test]
fn layout_is_deterministic_for_equal_inputs() {
    let first = vec![
        account("alpha", AccountKind::SplMint),
        account("beta", AccountKind::System),
    ];
    let second = first.clone();

    assert_eq!(compute_layout(&first), compute_layout(&second));
}

#[test]
fn offsets_are_monotonic_in_emission_order() {
    let accounts = vec![
        account("one", AccountKind::SplToken),
        account("two", AccountKind::System),
        account("three", AccountKind::SplMint),
    ];
    let entries = compute_layout(&accounts);

    // Skip the fixed NUM_ACCOUNTS label; everything after is cursor-ordered.
    for pair in entries[1..].windows(2) {
        assert!(
            pair[0].offset <= pair[1].offset,
            "{} (0x{:x}) > {} (0x{:x})",
            pair[0].label,
            pair[0].offset,
            pair[1].label,
            pair[1].offset
        );
    }
}

#[test]
fn negative_data_length_does_not_panic() {
    let mut broken = account("x", AccountKind::System);
    broken.data_len = -500;

    let entries = compute_layout(&[broken]);
    assert_eq!(entries.len(), 10);
}

#[test]
fn offsets_render_as_zero_padded_hex() {
    assert_eq!(format_offset(0), "0x0000");
    assert_eq!(format_offset(8), "0x0008");
    assert_eq!(format_offset(10344), "0x2868");
    assert_eq!(format_offset(0x12345), "0x12345");
}

#[test]
fn each_notation_contains_label_and_offset_verbatim() {
    let cases = [
        (Notation::Asm, ".equ VAULT_KEY, 0x0010"),
        (Notation::Rust, "const VAULT_KEY: usize = 0x0010;"),
        (Notation::C, "#define VAULT_KEY 0x0010"),
    ];
    for (notation, expected) in cases {
        let line = render_entry("VAULT_KEY", 0x10, notation);
        assert_eq!(line, expected);
        assert!(line.contains("VAULT_KEY"));
        assert!(line.contains("0x0010"));
    }
}

#[test]
fn unknown_notation_renders_nothing_for_every_entry() {
    let entries = compute_layout(&[account("vault", AccountKind::SplToken)]);
    for entry in &entries {
        assert_eq!(render_entry(&entry.label, entry.offset, Notation::Unknown), "");
    }
}

#[test]
fn unknown_kind_string_deserializes_to_unknown() {
    let json = r#"{"name":"v","type":"Stake","dataLength":7}"#;
    let parsed: Account = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.kind, AccountKind::Unknown);
    assert_eq!(parsed.data_len, 7);
}

#[test]
fn unknown_notation_string_deserializes_to_unknown() {
    let parsed: Notation = serde_json::from_str(r#""Zig""#).unwrap();
    assert_eq!(parsed, Notation::Unknown);
    let parsed: Notation = serde_json::from_str(r#""ASM""#).unwrap();
    assert_eq!(parsed, Notation::Asm);
}
