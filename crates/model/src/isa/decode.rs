//! RV32I instruction decoder.
//!
//! Splits a raw 32-bit instruction word into a structured [`Decoded`]
//! instruction: opcode, register indices, function codes, the five
//! sign-extended immediates, the instruction-type tag, and the canonical
//! immediate for that type.
//!
//! Decoding is a pure, total function: every 32-bit word produces a
//! `Decoded`, with [`InstType::Unknown`] as the catch-all for opcodes
//! outside the supported subset.

use crate::isa::instruction::{Decoded, InstType, InstructionBits};

/// Total width of an instruction word in bits.
const WORD_WIDTH: u32 = 32;

/// Bit shift for the contiguous I-type immediate (bits 31-20).
///
/// I-type format: `imm[11:0] | rs1 | funct3 | rd | opcode`.
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for the S-type immediate low field (bits 11-7, imm[4:0]).
///
/// S-type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
const S_IMM_LOW_SHIFT: u32 = 7;
/// Bit mask for the 5-bit S-type immediate low field.
const S_IMM_LOW_MASK: u32 = 0x1F;
/// Bit shift for the S-type immediate high field (bits 31-25, imm[11:5]).
const S_IMM_HIGH_SHIFT: u32 = 25;
/// Bit mask for the 7-bit S-type immediate high field.
const S_IMM_HIGH_MASK: u32 = 0x7F;
/// Bit position of the high field in the reassembled S-type immediate.
const S_IMM_HIGH_POS: u32 = 5;
/// Width of the S-type immediate in bits.
const S_IMM_BITS: u32 = 12;

/// B-type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] |
/// imm[11] | opcode`. Bit 0 of the offset is implicitly zero.
const B_IMM_11_SHIFT: u32 = 7;
/// Bit shift for B-type imm[4:1] (instruction bits 11-8).
const B_IMM_4_1_SHIFT: u32 = 8;
/// Bit mask for the 4-bit B-type imm[4:1] field.
const B_IMM_4_1_MASK: u32 = 0xF;
/// Bit shift for B-type imm[10:5] (instruction bits 30-25).
const B_IMM_10_5_SHIFT: u32 = 25;
/// Bit mask for the 6-bit B-type imm[10:5] field.
const B_IMM_10_5_MASK: u32 = 0x3F;
/// Bit shift for B-type imm[12], the sign bit (instruction bit 31).
const B_IMM_12_SHIFT: u32 = 31;
/// Width of the B-type immediate in bits (sign-extended from bit 12).
const B_IMM_BITS: u32 = 13;

/// Bit mask for the U-type immediate (bits 31-12, value pre-shifted).
///
/// U-type format: `imm[31:12] | rd | opcode`. The top bits are already the
/// value, so no further sign extension is needed.
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// J-type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd |
/// opcode`. Bit 0 of the offset is implicitly zero.
const J_IMM_19_12_MASK: u32 = 0xFF000;
/// Bit shift for J-type imm[11] (instruction bit 20).
const J_IMM_11_SHIFT: u32 = 20;
/// Bit shift for J-type imm[10:1] (instruction bits 30-21).
const J_IMM_10_1_SHIFT: u32 = 21;
/// Bit mask for the 10-bit J-type imm[10:1] field.
const J_IMM_10_1_MASK: u32 = 0x3FF;
/// Bit shift for J-type imm[20], the sign bit (instruction bit 31).
const J_IMM_20_SHIFT: u32 = 31;
/// Width of the J-type immediate in bits (sign-extended from bit 20).
const J_IMM_BITS: u32 = 21;

/// Decodes a 32-bit instruction word into its component fields.
///
/// All five immediates are computed unconditionally from their fixed bit
/// positions; the canonical `imm` is then selected by the instruction type
/// (I-format for I/Load/Jalr, S for Store, B for Branch, U for Lui/Auipc,
/// J for Jal, and 0 for R-type and Unknown).
///
/// # Arguments
///
/// * `word` - The raw 32-bit instruction word.
///
/// # Returns
///
/// The fully populated [`Decoded`] structure; this function never fails.
pub fn decode(word: u32) -> Decoded {
    let inst_type = InstType::from_opcode(word.opcode());

    let imm_i = decode_i_imm(word);
    let imm_s = decode_s_imm(word);
    let imm_b = decode_b_imm(word);
    let imm_u = decode_u_imm(word);
    let imm_j = decode_j_imm(word);

    let imm = match inst_type {
        InstType::I | InstType::Load | InstType::Jalr => imm_i,
        InstType::Store => imm_s,
        InstType::Branch => imm_b,
        InstType::Lui | InstType::Auipc => imm_u,
        InstType::Jal => imm_j,
        InstType::R | InstType::Unknown => 0,
    };

    Decoded {
        raw: word,
        opcode: word.opcode(),
        rd: word.rd(),
        rs1: word.rs1(),
        rs2: word.rs2(),
        funct3: word.funct3(),
        funct7: word.funct7(),
        imm_i,
        imm_s,
        imm_b,
        imm_u,
        imm_j,
        inst_type,
        imm,
    }
}

/// Decodes the contiguous 12-bit I-type immediate.
fn decode_i_imm(word: u32) -> i32 {
    (word as i32) >> I_IMM_SHIFT
}

/// Decodes the split 12-bit S-type immediate.
fn decode_s_imm(word: u32) -> i32 {
    let low = (word >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (word >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    sign_extend((high << S_IMM_HIGH_POS) | low, S_IMM_BITS)
}

/// Decodes the split 13-bit B-type branch offset (bit 0 implicitly zero).
fn decode_b_imm(word: u32) -> i32 {
    let bit_11 = (word >> B_IMM_11_SHIFT) & 1;
    let bits_4_1 = (word >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (word >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (word >> B_IMM_12_SHIFT) & 1;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// Decodes the upper-immediate U-type value (lower 12 bits zero).
fn decode_u_imm(word: u32) -> i32 {
    (word & U_IMM_MASK) as i32
}

/// Decodes the split 21-bit J-type jump offset (bit 0 implicitly zero).
fn decode_j_imm(word: u32) -> i32 {
    let bits_19_12 = word & J_IMM_19_12_MASK;
    let bit_11 = (word >> J_IMM_11_SHIFT) & 1;
    let bits_10_1 = (word >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (word >> J_IMM_20_SHIFT) & 1;

    let combined = (bit_20 << 20) | bits_19_12 | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign-extends a `bits`-wide value to a signed 32-bit integer.
///
/// Shifting the field up to bit 31 and arithmetic-shifting back replicates
/// the field's top bit; equivalent to the two's-complement XOR/subtract
/// formulation for every field width used here (12, 13 and 21 bits).
fn sign_extend(value: u32, bits: u32) -> i32 {
    let shift = WORD_WIDTH - bits;
    ((value << shift) as i32) >> shift
}
