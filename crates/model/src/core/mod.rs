//! Execution engine.
//!
//! The architectural state of the reference model (register file, program
//! counter, memory, UART) and the step function that applies exactly one
//! decoded instruction's semantics per invocation.

/// Architectural step function and CPU state.
pub mod engine;

/// General-purpose register file.
pub mod gpr;

pub use engine::Cpu;
pub use gpr::Gpr;
