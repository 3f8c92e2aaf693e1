//! RV32 general-purpose register file.
//!
//! 32 lanes of 32 bits each. Lane 0 (`x0`) is hardwired to zero: it always
//! reads as 0 and writes to it are discarded, matching the hardware
//! register file this model is diffed against.

/// General-purpose register file (x0-x31).
#[derive(Clone, Debug, Default)]
pub struct Gpr {
    regs: [u32; 32],
}

impl Gpr {
    /// Creates a register file with all lanes zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). `x0` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are discarded.
    /// * `val` - The 32-bit value to store.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Dumps all registers to stdout, four per line.
    pub fn dump(&self) {
        for i in (0..32).step_by(4) {
            println!(
                "x{:<2}={:#010x} x{:<2}={:#010x} x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1],
                i + 2,
                self.regs[i + 2],
                i + 3,
                self.regs[i + 3],
            );
        }
    }
}
