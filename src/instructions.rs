use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::AsmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormatKind {
    Register,
    Immediate,
    Jump,
}

impl FormatKind {
    pub fn tag(self) -> char {
        match self {
            FormatKind::Register => 'R',
            FormatKind::Immediate => 'I',
            FormatKind::Jump => 'J',
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for FormatKind {
    type Err = AsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" | "Register" => Ok(FormatKind::Register),
            "I" | "Immediate" => Ok(FormatKind::Immediate),
            "J" | "Jump" => Ok(FormatKind::Jump),
            other => Err(AsmError::UnknownFormatKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstructionFormat {
    pub opcode: u8,        // 6 bits
    pub funct: Option<u8>, // 6 bits, register format only
    pub kind: FormatKind,
}

impl InstructionFormat {
    pub const fn reg(funct: u8) -> Self {
        Self {
            opcode: 0b000000,
            funct: Some(funct),
            kind: FormatKind::Register,
        }
    }

    pub const fn imm(opcode: u8) -> Self {
        Self {
            opcode,
            funct: None,
            kind: FormatKind::Immediate,
        }
    }

    pub const fn jump(opcode: u8) -> Self {
        Self {
            opcode,
            funct: None,
            kind: FormatKind::Jump,
        }
    }

    pub fn opcode_bits(&self) -> String {
        format!("{:06b}", self.opcode & 0x3F)
    }

    pub fn funct_bits(&self) -> Option<String> {
        self.funct.map(|f| format!("{:06b}", f & 0x3F))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub format: InstructionFormat,
}

pub const TABLE: &[InstrDesc] = &[
    InstrDesc {
        mnemonic: "add",
        format: InstructionFormat::reg(0b100000),
    },
    InstrDesc {
        mnemonic: "sub",
        format: InstructionFormat::reg(0b100010),
    },
    InstrDesc {
        mnemonic: "and",
        format: InstructionFormat::reg(0b100100),
    },
    InstrDesc {
        mnemonic: "or",
        format: InstructionFormat::reg(0b100101),
    },
    InstrDesc {
        mnemonic: "slt",
        format: InstructionFormat::reg(0b101010),
    },
    InstrDesc {
        mnemonic: "syscall",
        format: InstructionFormat::reg(0b001100),
    },
    InstrDesc {
        mnemonic: "addi",
        format: InstructionFormat::imm(0b001000),
    },
    InstrDesc {
        mnemonic: "addiu",
        format: InstructionFormat::imm(0b001001),
    },
    InstrDesc {
        mnemonic: "andi",
        format: InstructionFormat::imm(0b001100),
    },
    InstrDesc {
        mnemonic: "ori",
        format: InstructionFormat::imm(0b001101),
    },
    InstrDesc {
        mnemonic: "lui",
        format: InstructionFormat::imm(0b001111),
    },
    InstrDesc {
        mnemonic: "lw",
        format: InstructionFormat::imm(0b100011),
    },
    InstrDesc {
        mnemonic: "sw",
        format: InstructionFormat::imm(0b101011),
    },
    InstrDesc {
        mnemonic: "beq",
        format: InstructionFormat::imm(0b000100),
    },
    InstrDesc {
        mnemonic: "bne",
        format: InstructionFormat::imm(0b000101),
    },
    InstrDesc {
        mnemonic: "j",
        format: InstructionFormat::jump(0b000010),
    },
];

/// Extra catalog entry as it appears in a `--catalog` JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub mnemonic: String,
    pub opcode: String,
    #[serde(default)]
    pub funct: Option<String>,
    pub kind: String,
}

fn parse_bits6(mnemonic: &str, field: &str, bits: &str) -> Result<u8, AsmError> {
    if bits.len() != 6 || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(AsmError::InvalidCatalogEntry {
            mnemonic: mnemonic.to_string(),
            reason: format!("{field} must be 6 binary digits, got {bits:?}"),
        });
    }
    u8::from_str_radix(bits, 2).map_err(|e| AsmError::InvalidCatalogEntry {
        mnemonic: mnemonic.to_string(),
        reason: e.to_string(),
    })
}

impl TryFrom<&CatalogEntry> for InstructionFormat {
    type Error = AsmError;

    fn try_from(e: &CatalogEntry) -> Result<Self, Self::Error> {
        let kind: FormatKind = e.kind.parse()?;
        let opcode = parse_bits6(&e.mnemonic, "opcode", &e.opcode)?;
        let funct = match (kind, e.funct.as_deref()) {
            (FormatKind::Register, Some(f)) => Some(parse_bits6(&e.mnemonic, "funct", f)?),
            (FormatKind::Register, None) => {
                return Err(AsmError::InvalidCatalogEntry {
                    mnemonic: e.mnemonic.clone(),
                    reason: "register format requires a funct code".into(),
                })
            }
            (_, Some(_)) => {
                return Err(AsmError::InvalidCatalogEntry {
                    mnemonic: e.mnemonic.clone(),
                    reason: format!("{kind} format takes no funct code"),
                })
            }
            (_, None) => None,
        };
        Ok(Self { opcode, funct, kind })
    }
}

/// Mnemonic -> format map. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<String, InstructionFormat>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: TABLE
                .iter()
                .map(|d| (d.mnemonic.to_string(), d.format))
                .collect(),
        }
    }
}

impl Catalog {
    /// Built-in table, shared process-wide.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(Catalog::default)
    }

    /// Built-in table with `entries` added to it. Built-in mnemonics cannot
    /// be redefined.
    pub fn with_entries(entries: &[CatalogEntry]) -> Result<Self, AsmError> {
        let mut cat = Self::default();
        for e in entries {
            if TABLE.iter().any(|d| d.mnemonic == e.mnemonic) {
                return Err(AsmError::InvalidCatalogEntry {
                    mnemonic: e.mnemonic.clone(),
                    reason: "redefines built-in mnemonic".into(),
                });
            }
            let format = InstructionFormat::try_from(e)?;
            tracing::debug!(mnemonic = %e.mnemonic, kind = %format.kind, "catalog entry added");
            cat.entries.insert(e.mnemonic.clone(), format);
        }
        Ok(cat)
    }

    pub fn from_json(json: &str) -> Result<Self, AsmError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::with_entries(&entries)
    }

    /// Case-sensitive exact match.
    pub fn lookup(&self, mnemonic: &str) -> Result<&InstructionFormat, AsmError> {
        self.entries
            .get(mnemonic)
            .ok_or_else(|| AsmError::UnsupportedInstruction(mnemonic.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn lookup(mnemonic: &str) -> Result<&'static InstructionFormat, AsmError> {
    Catalog::builtin().lookup(mnemonic)
}
