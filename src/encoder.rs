use std::fmt;

use serde::Serialize;

use crate::instructions::InstructionFormat;
use crate::parser::ParsedInstruction;
use crate::registers;

// Field positions, MSB -> LSB: opcode(6) rs(5) rt(5) rd(5) shamt(5) funct(6)
const OPCODE_SHIFT: u32 = 26;
const RS_SHIFT: u32 = 21;
const RT_SHIFT: u32 = 16;
const RD_SHIFT: u32 = 11;
const SHAMT_SHIFT: u32 = 6;
const REG_MASK: u32 = 0x1F;
const CODE_MASK: u32 = 0x3F;

/// Register operands in the order they are read from the line: rd, rs, rt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Operands {
    pub rd: u8,
    pub rs: u8,
    pub rt: u8,
}

impl Operands {
    /// token[0] -> rd, token[1] -> rs, token[2] -> rt. Missing or unknown
    /// tokens resolve to register 0.
    pub fn resolve(p: &ParsedInstruction) -> Self {
        Self {
            rd: registers::resolve(p.operand(0)),
            rs: registers::resolve(p.operand(1)),
            rt: registers::resolve(p.operand(2)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fields {
    pub opcode: u8,
    pub rs: u8,
    pub rt: u8,
    pub rd: u8,
    pub shamt: u8,
    pub funct: u8,
}

/// A packed 32-bit instruction word. Displays as 8 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedWord(pub u32);

impl EncodedWord {
    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn fields(self) -> Fields {
        let w = self.0;
        Fields {
            opcode: ((w >> OPCODE_SHIFT) & CODE_MASK) as u8,
            rs: ((w >> RS_SHIFT) & REG_MASK) as u8,
            rt: ((w >> RT_SHIFT) & REG_MASK) as u8,
            rd: ((w >> RD_SHIFT) & REG_MASK) as u8,
            shamt: ((w >> SHAMT_SHIFT) & REG_MASK) as u8,
            funct: (w & CODE_MASK) as u8,
        }
    }

    /// Bit groups separated by spaces, e.g. `000000 01001 01010 01000 00000 100000`.
    pub fn binary(self) -> String {
        let f = self.fields();
        format!(
            "{:06b} {:05b} {:05b} {:05b} {:05b} {:06b}",
            f.opcode, f.rs, f.rt, f.rd, f.shamt, f.funct
        )
    }
}

impl fmt::Display for EncodedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl Serialize for EncodedWord {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

fn pack(opcode: u8, ops: Operands, funct: u8) -> EncodedWord {
    let word = ((opcode as u32 & CODE_MASK) << OPCODE_SHIFT)
        | ((ops.rs as u32 & REG_MASK) << RS_SHIFT)
        | ((ops.rt as u32 & REG_MASK) << RT_SHIFT)
        | ((ops.rd as u32 & REG_MASK) << RD_SHIFT)
        | (funct as u32 & CODE_MASK);
    tracing::debug!(rs = ops.rs, rt = ops.rt, rd = ops.rd, "packed fields");
    EncodedWord(word)
}

pub fn encode_register(format: &InstructionFormat, ops: Operands) -> EncodedWord {
    pack(format.opcode, ops, format.funct.unwrap_or(0))
}

// Immediate and jump words reuse the register layout: no 16-bit immediate,
// no 26-bit target, and an all-zero funct slot.
pub fn encode_immediate(format: &InstructionFormat, ops: Operands) -> EncodedWord {
    pack(format.opcode, ops, 0)
}

pub fn encode_jump(format: &InstructionFormat, ops: Operands) -> EncodedWord {
    pack(format.opcode, ops, 0)
}
