//! Instruction Set Architecture (ISA) definitions.
//!
//! Contains the RV32I opcode and function-code tables and the decoding
//! logic for the instruction subset the companion single-cycle design
//! implements, including its nonstandard `NOT rd, rs1` encoding.

/// Instruction decoding logic for all RV32I instruction formats.
pub mod decode;

/// funct3 function-select codes.
pub mod funct3;

/// funct7 function-select codes.
pub mod funct7;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Major opcodes for the base integer instruction set.
pub mod opcodes;
