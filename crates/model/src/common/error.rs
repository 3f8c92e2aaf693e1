//! Fatal error definitions for the reference model core.
//!
//! Decoding is total and never fails; everything that can go wrong surfaces
//! at execution time:
//! 1. **Memory faults:** an access whose span leaves `[0, capacity)`.
//! 2. **Execution faults:** an `Unknown` instruction reaching the engine, or
//!    a recognized type with no matching function-select combination.
//!
//! All of these abort the run. Comparison mismatches against the hardware
//! design are a separate concern and live in [`crate::sim::verify`].

use thiserror::Error;

use crate::isa::instruction::InstType;

/// Byte-addressable memory access fault.
///
/// Every access is bounds-checked over its full requested span; an
/// out-of-range access is rejected, never truncated or wrapped.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    /// The requested span `[addr, addr + len)` leaves `[0, capacity)`.
    #[error("memory access out of range: {addr:#010x} (+{len}), capacity {capacity:#x}")]
    OutOfRange {
        /// Start address of the rejected access.
        addr: u32,
        /// Length of the rejected access in bytes.
        len: usize,
        /// Capacity of the memory in bytes.
        capacity: usize,
    },
}

/// Fatal execution fault raised by [`crate::core::Cpu::step`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    /// An instruction word whose opcode maps to no known instruction type.
    ///
    /// Decoding tags these `Unknown` instead of failing; the fault is
    /// deferred to execution so that decode stays total.
    #[error("unknown instruction {raw:#010x} (opcode {opcode:#04x}) at pc {pc:#010x}")]
    UnknownInstruction {
        /// Raw 32-bit instruction word.
        raw: u32,
        /// The unmapped 7-bit opcode.
        opcode: u32,
        /// Program counter of the faulting instruction.
        pc: u32,
    },

    /// A recognized instruction type with an unmatched `(funct3, funct7)`
    /// combination.
    #[error(
        "unsupported {inst_type:?} variant: funct3={funct3:#x} funct7={funct7:#04x} \
         at pc {pc:#010x}"
    )]
    UnsupportedVariant {
        /// Instruction type selected by the opcode.
        inst_type: InstType,
        /// The unmatched funct3 field.
        funct3: u32,
        /// The unmatched funct7 field.
        funct7: u32,
        /// Program counter of the faulting instruction.
        pc: u32,
    },

    /// A load or store landed outside memory while matching neither of the
    /// reserved UART addresses.
    #[error(transparent)]
    Memory(#[from] MemoryError),
}
