//! Golden reference model for a single-cycle RV32I (+UART) hardware design.
//!
//! This crate implements the software oracle a hardware design under test is
//! diffed against after every cycle:
//! 1. **ISA:** Decoding of all RV32I instruction formats (opcodes, register
//!    fields, function codes, the five sign-extended immediates).
//! 2. **Core:** Functional execution of one instruction per step over the
//!    architectural state (register file, program counter, memory).
//! 3. **SoC:** Byte-addressable memory with bounds-checked access and the
//!    design's fixed memory-mapped UART TX/RX pair.
//! 4. **Simulation:** Hex instruction-image loading, the run loop, and the
//!    lockstep comparison boundary against the design under test.
//!
//! The model is deliberately not a general RV32I simulator: it implements
//! exactly the instruction subset of the companion single-cycle design,
//! including its nonstandard `NOT rd, rs1` encoding, and treats every
//! unsupported combination as a fatal error so incorrect hardware behavior
//! is caught deterministically and loudly.

/// Shared error types (memory faults, execution faults).
pub mod common;
/// Model configuration (defaults, hierarchical config structures).
pub mod config;
/// Execution engine (register file, architectural step function).
pub mod core;
/// Instruction set (opcodes, function codes, decoder).
pub mod isa;
/// Simulation (program image, run loop, hardware comparison boundary).
pub mod sim;
/// Memory and memory-mapped devices (byte-addressable RAM, UART).
pub mod soc;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural state and step function of the reference model.
pub use crate::core::Cpu;
/// Top-level runner: owns the CPU and the program image.
pub use crate::sim::simulator::Simulator;
