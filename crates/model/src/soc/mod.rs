//! Memory and memory-mapped devices.
//!
//! The companion design has a flat byte-addressable RAM plus exactly one
//! memory-mapped device: a UART with a fixed transmit/receive word pair.
//! Both are modeled here; the execution engine checks the UART addresses
//! before touching memory.

/// Byte-addressable memory with bounds-checked access.
pub mod memory;

/// Memory-mapped UART (fixed TX/RX addresses).
pub mod uart;

pub use memory::ByteMemory;
pub use uart::Uart;
