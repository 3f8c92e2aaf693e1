//! Raw-instruction encoders.
//!
//! Constructs 32-bit RV32I instruction words field by field, plus helpers
//! for the specific instructions the tests lean on (including the design's
//! nonstandard `NOT`).

use rv32ref_core::isa::opcodes::*;

/// Encode an R-type instruction.
pub fn r_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    (funct7 & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an I-type instruction.
pub fn i_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, imm: i32) -> u32 {
    ((imm as u32) & 0xFFF) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an S-type instruction.
pub fn s_type(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    ((v >> 5) & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (v & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode a B-type instruction (imm must be even).
pub fn b_type(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    ((v >> 12) & 1) << 31
        | ((v >> 5) & 0x3F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | ((v >> 1) & 0xF) << 8
        | ((v >> 11) & 1) << 7
        | (opcode & 0x7F)
}

/// Encode a U-type instruction from the upper 20 immediate bits.
pub fn u_type(opcode: u32, rd: u32, imm20: u32) -> u32 {
    (imm20 & 0xFFFFF) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode a J-type instruction (imm must be even).
pub fn j_type(opcode: u32, rd: u32, imm: i32) -> u32 {
    let v = imm as u32;
    ((v >> 20) & 1) << 31
        | ((v >> 1) & 0x3FF) << 21
        | ((v >> 11) & 1) << 20
        | (((v >> 12) & 0xFF) << 12)
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

// --- Helpers for the common instructions ---

/// ADD rd, rs1, rs2.
pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b000, rs1, rs2, 0b0000000)
}

/// SUB rd, rs1, rs2.
pub fn sub(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(OP_REG, rd, 0b000, rs1, rs2, 0b0100000)
}

/// Nonstandard NOT rd, rs1 (SLL funct3 slot, funct7 0x20).
pub fn not(rd: u32, rs1: u32) -> u32 {
    r_type(OP_REG, rd, 0b001, rs1, 0, 0b0100000)
}

/// ADDI rd, rs1, imm.
pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_IMM, rd, 0b000, rs1, imm)
}

/// LW rd, imm(rs1).
pub fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, rd, 0b010, rs1, imm)
}

/// LB rd, imm(rs1).
pub fn lb(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, rd, 0b000, rs1, imm)
}

/// LBU rd, imm(rs1).
pub fn lbu(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, rd, 0b100, rs1, imm)
}

/// LH rd, imm(rs1).
pub fn lh(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, rd, 0b001, rs1, imm)
}

/// LHU rd, imm(rs1).
pub fn lhu(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_LOAD, rd, 0b101, rs1, imm)
}

/// SW rs2, imm(rs1).
pub fn sw(rs1: u32, rs2: u32, imm: i32) -> u32 {
    s_type(OP_STORE, 0b010, rs1, rs2, imm)
}

/// SH rs2, imm(rs1).
pub fn sh(rs1: u32, rs2: u32, imm: i32) -> u32 {
    s_type(OP_STORE, 0b001, rs1, rs2, imm)
}

/// SB rs2, imm(rs1).
pub fn sb(rs1: u32, rs2: u32, imm: i32) -> u32 {
    s_type(OP_STORE, 0b000, rs1, rs2, imm)
}

/// BEQ rs1, rs2, imm.
pub fn beq(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(OP_BRANCH, 0b000, rs1, rs2, imm)
}

/// BNE rs1, rs2, imm.
pub fn bne(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(OP_BRANCH, 0b001, rs1, rs2, imm)
}

/// JAL rd, imm.
pub fn jal(rd: u32, imm: i32) -> u32 {
    j_type(OP_JAL, rd, imm)
}

/// JALR rd, rs1, imm.
pub fn jalr(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(OP_JALR, rd, 0b000, rs1, imm)
}

/// LUI rd, imm20.
pub fn lui(rd: u32, imm20: u32) -> u32 {
    u_type(OP_LUI, rd, imm20)
}

/// AUIPC rd, imm20.
pub fn auipc(rd: u32, imm20: u32) -> u32 {
    u_type(OP_AUIPC, rd, imm20)
}
