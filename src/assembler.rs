use serde::Serialize;

use crate::encoder::{self, EncodedWord, Fields, Operands};
use crate::error::AsmError;
use crate::instructions::{Catalog, FormatKind, InstructionFormat};
use crate::parser;

/// Encodes single instruction lines against a frozen catalog.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'c> {
    catalog: &'c Catalog,
}

impl Default for Assembler<'static> {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

/// Everything known about one encoded line.
#[derive(Debug, Clone, Serialize)]
pub struct Encoding {
    pub line: String,
    pub mnemonic: String,
    pub kind: FormatKind,
    pub operands: Operands,
    pub word: EncodedWord,
    pub binary: String,
    pub fields: Fields,
}

impl<'c> Assembler<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn encode(&self, line: &str) -> Result<Encoding, AsmError> {
        let parsed = parser::parse(line);
        let format: &InstructionFormat = self.catalog.lookup(&parsed.mnemonic)?;
        let operands = Operands::resolve(&parsed);
        let word = match format.kind {
            FormatKind::Register => encoder::encode_register(format, operands),
            FormatKind::Immediate => encoder::encode_immediate(format, operands),
            FormatKind::Jump => encoder::encode_jump(format, operands),
        };
        tracing::debug!(mnemonic = %parsed.mnemonic, kind = %format.kind, %word, "assembled");
        Ok(Encoding {
            line: line.trim().to_string(),
            mnemonic: parsed.mnemonic,
            kind: format.kind,
            operands,
            word,
            binary: word.binary(),
            fields: word.fields(),
        })
    }

    /// Hex rendering of [`Assembler::encode`].
    pub fn assemble(&self, line: &str) -> Result<String, AsmError> {
        Ok(self.encode(line)?.word.to_string())
    }
}

/// Encodes `line` with the built-in catalog and returns 8 lowercase hex digits.
pub fn assemble(line: &str) -> Result<String, AsmError> {
    Assembler::default().assemble(line)
}
