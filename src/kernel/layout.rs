//! Offset layout engine.
//!
//! Models how the SVM loader packs accounts into the flat program-input
//! buffer: per account a fixed 88-byte prelude (header, key, owner,
//! lamports, data length), the variable-length data region, realloc
//! headroom, a rent-exemption word, then 8-byte alignment. Trailing the
//! account table are the instruction-data length, the instruction data and
//! the program id.
//!
//! `compute_layout` is a pure fold over the account list; it is rebuilt
//! from scratch on every call and never validates its input. Negative data
//! lengths wrap through the cursor arithmetic without panicking —
//! validation belongs to the caller.

use serde::{Deserialize, Serialize};

/// Reserved region before the account table.
pub const BASE_OFFSET: i64 = 8;

/// Realloc headroom reserved after each account's data region (10 KiB).
pub const REALLOC_HEADROOM: i64 = 10240;

/// Rent-exemption word reserved after the headroom.
pub const RENT_RESERVE: i64 = 8;

/// The cursor is rounded up to this boundary after each account.
pub const ALIGNMENT: i64 = 8;

/// Fixed-size sub-fields emitted for every account, in buffer order.
const FIXED_FIELDS: [(&str, i64); 5] = [
    ("HEADER", 8),
    ("KEY", 32),
    ("OWNER", 32),
    ("LAMPORTS", 8),
    ("DATA_LEN", 8),
];

/// Account type; implies the default data length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    System,
    #[serde(rename = "SPL Token")]
    SplToken,
    #[serde(rename = "SPL Mint")]
    SplMint,
    /// Catch-all for kind strings this version does not know.
    #[serde(other)]
    Unknown,
}

impl AccountKind {
    pub const ALL: [AccountKind; 3] = [
        AccountKind::System,
        AccountKind::SplToken,
        AccountKind::SplMint,
    ];

    /// Data length implied by the kind (SPL Token = 165, SPL Mint = 82).
    pub fn default_data_len(self) -> i64 {
        match self {
            AccountKind::System => 0,
            AccountKind::SplToken => 165,
            AccountKind::SplMint => 82,
            AccountKind::Unknown => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccountKind::System => "System",
            AccountKind::SplToken => "SPL Token",
            AccountKind::SplMint => "SPL Mint",
            AccountKind::Unknown => "Unknown",
        }
    }

    /// Next selectable kind, wrapping. `Unknown` re-enters at `System`.
    pub fn cycle(self) -> AccountKind {
        match self {
            AccountKind::System => AccountKind::SplToken,
            AccountKind::SplToken => AccountKind::SplMint,
            AccountKind::SplMint => AccountKind::System,
            AccountKind::Unknown => AccountKind::System,
        }
    }
}

/// A named account contributing one sub-layout to the packed buffer.
///
/// Wire names (`type`, `dataLength`) match the project JSON files the
/// original web tool exports, so those import unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    #[serde(rename = "dataLength")]
    pub data_len: i64,
}

impl Account {
    pub fn new(name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            name: name.into(),
            kind,
            data_len: kind.default_data_len(),
        }
    }
}

/// A symbolic name bound to a byte position in the simulated buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetEntry {
    pub label: String,
    pub offset: i64,
}

/// Output notation for rendered constant definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Notation {
    #[default]
    #[serde(rename = "ASM")]
    Asm,
    Rust,
    C,
    /// Unrecognized selector; renders nothing for every entry.
    #[serde(other)]
    Unknown,
}

impl Notation {
    pub const TABS: [Notation; 3] = [Notation::Asm, Notation::Rust, Notation::C];

    pub fn label(self) -> &'static str {
        match self {
            Notation::Asm => "ASM",
            Notation::Rust => "Rust",
            Notation::C => "C",
            Notation::Unknown => "?",
        }
    }

    pub fn cycle(self) -> Notation {
        match self {
            Notation::Asm => Notation::Rust,
            Notation::Rust => Notation::C,
            Notation::C => Notation::Asm,
            Notation::Unknown => Notation::Asm,
        }
    }
}

/// Compute the full ordered list of labeled offsets for `accounts`.
///
/// Label prefixes are the account names upper-cased with no further
/// sanitization; a name like `"my account"` yields `MY ACCOUNT_KEY`. That
/// mirrors the original tool and is the caller's problem to avoid.
///
/// `INSTRUCTION_DATA` and `PROGRAM_ID` are emitted at the same offset: the
/// cursor is not advanced between them. Quirk inherited from the original
/// tool, kept as-is.
pub fn compute_layout(accounts: &[Account]) -> Vec<OffsetEntry> {
    let mut cursor: i64 = BASE_OFFSET;
    let mut entries = Vec::with_capacity(accounts.len() * 6 + 4);

    // Fixed label: always reports offset 0 regardless of the cursor.
    entries.push(OffsetEntry {
        label: "NUM_ACCOUNTS".to_string(),
        offset: 0,
    });

    for account in accounts {
        let prefix = account.name.to_uppercase();

        for (field, size) in FIXED_FIELDS {
            entries.push(OffsetEntry {
                label: format!("{prefix}_{field}"),
                offset: cursor,
            });
            cursor = cursor.wrapping_add(size);
        }

        entries.push(OffsetEntry {
            label: format!("{prefix}_DATA"),
            offset: cursor,
        });
        cursor = cursor.wrapping_add(account.data_len);

        cursor = cursor.wrapping_add(REALLOC_HEADROOM);
        cursor = cursor.wrapping_add(RENT_RESERVE);

        let rem = cursor % ALIGNMENT;
        if rem != 0 {
            cursor = cursor.wrapping_add(ALIGNMENT - rem);
        }
    }

    entries.push(OffsetEntry {
        label: "INSTRUCTION_DATA_LEN".to_string(),
        offset: cursor,
    });
    cursor = cursor.wrapping_add(8);

    entries.push(OffsetEntry {
        label: "INSTRUCTION_DATA".to_string(),
        offset: cursor,
    });

    // No advance: shares INSTRUCTION_DATA's offset.
    entries.push(OffsetEntry {
        label: "PROGRAM_ID".to_string(),
        offset: cursor,
    });

    entries
}

/// `0x`-prefixed lowercase hex, zero-padded to at least 4 digits.
pub fn format_offset(offset: i64) -> String {
    format!("0x{offset:04x}")
}

/// Render one entry in the given notation. `Unknown` renders nothing.
pub fn render_entry(label: &str, offset: i64, notation: Notation) -> String {
    let hex = format_offset(offset);
    match notation {
        Notation::Asm => format!(".equ {label}, {hex}"),
        Notation::Rust => format!("const {label}: usize = {hex};"),
        Notation::C => format!("#define {label} {hex}"),
        Notation::Unknown => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/layout.rs"]
mod tests;
