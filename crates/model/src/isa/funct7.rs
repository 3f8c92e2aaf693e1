//! RV32I function codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes R-type operations sharing a
//! `funct3` (ADD vs SUB, SRL vs SRA) and encodes bit 30 of the word used by
//! immediate right shifts (SRLI vs SRAI).

/// Default operation (ADD, SRL, SLL, etc.).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA).
pub const SUB: u32 = 0b0100000;
/// Alias for SUB (used for Shift Right Arithmetic).
pub const SRA: u32 = 0b0100000;

/// Nonstandard `NOT rd, rs1` marker in the SLL funct3 slot.
///
/// The companion design folds a bitwise-NOT instruction into
/// `(funct3 = SLL, funct7 = 0x20)`; this is not standard RV32I but must be
/// modeled exactly since the hardware implements it.
pub const NOT: u32 = 0b0100000;
