//! Instruction encoding structures and bit extraction utilities.
//!
//! Provides the field-extraction trait for 32-bit instruction words, the
//! instruction-type tag derived from the major opcode, and the `Decoded`
//! structure produced by [`crate::isa::decode::decode`].

use crate::isa::opcodes;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded instruction words.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Returns the 5-bit register index (0-31). Register `x0` is hardwired
    /// to zero; writes to it are discarded by the register file.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// Instruction type tag, derived from the major opcode via a fixed mapping.
///
/// Unmapped opcodes are tagged `Unknown` so that decoding stays total; the
/// fault is raised only if such an instruction reaches the execution engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InstType {
    /// Register-register arithmetic (`OP_REG`).
    R,
    /// Register-immediate arithmetic (`OP_IMM`).
    I,
    /// Memory load (`OP_LOAD`).
    Load,
    /// Memory store (`OP_STORE`).
    Store,
    /// Conditional branch (`OP_BRANCH`).
    Branch,
    /// Jump and link (`OP_JAL`).
    Jal,
    /// Jump and link register (`OP_JALR`).
    Jalr,
    /// Add upper immediate to PC (`OP_AUIPC`).
    Auipc,
    /// Load upper immediate (`OP_LUI`).
    Lui,
    /// Catch-all for opcodes outside the supported subset.
    #[default]
    Unknown,
}

impl InstType {
    /// Maps a major opcode to its instruction type.
    ///
    /// This is the fixed opcode→type table of the design; any opcode absent
    /// from it yields `Unknown`.
    pub fn from_opcode(opcode: u32) -> Self {
        match opcode {
            opcodes::OP_REG => Self::R,
            opcodes::OP_IMM => Self::I,
            opcodes::OP_LOAD => Self::Load,
            opcodes::OP_STORE => Self::Store,
            opcodes::OP_BRANCH => Self::Branch,
            opcodes::OP_JAL => Self::Jal,
            opcodes::OP_JALR => Self::Jalr,
            opcodes::OP_AUIPC => Self::Auipc,
            opcodes::OP_LUI => Self::Lui,
            _ => Self::Unknown,
        }
    }
}

/// Decoded instruction: all fields extracted from a 32-bit word.
///
/// Produced fresh per decode call and immutable afterwards. The five
/// immediates are computed unconditionally from their fixed bit positions
/// regardless of instruction type; `imm` is the one relevant to
/// `inst_type` (0 for R-type and Unknown).
#[derive(Clone, Debug, Default)]
pub struct Decoded {
    /// Raw 32-bit instruction word.
    pub raw: u32,
    /// 7-bit major opcode.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// funct3 function-select field.
    pub funct3: u32,
    /// funct7 function-select field (meaningful for R-type and immediate
    /// right shifts).
    pub funct7: u32,
    /// Sign-extended I-format immediate (12-bit).
    pub imm_i: i32,
    /// Sign-extended S-format immediate (split 12-bit).
    pub imm_s: i32,
    /// Sign-extended B-format immediate (split 13-bit, bit 0 zero).
    pub imm_b: i32,
    /// U-format immediate (upper 20 bits, lower 12 zero).
    pub imm_u: i32,
    /// Sign-extended J-format immediate (split 21-bit, bit 0 zero).
    pub imm_j: i32,
    /// Instruction type derived from the opcode.
    pub inst_type: InstType,
    /// Canonical immediate for `inst_type`, selected from the five above.
    pub imm: i32,
}
