//! Hardware comparison boundary.
//!
//! After each model step, the resulting PC and all 32 register values must
//! equal the corresponding values read from the hardware design under test.
//! A mismatch is a verification failure — the terminal outcome of a run —
//! and is reported with both the model and hardware values. A mismatch is
//! not an engine fault: the model is assumed correct, the hardware is not.

use thiserror::Error;
use tracing::error;

use crate::common::error::ExecError;
use crate::core::Cpu;

/// Narrow interface to the hardware design under test.
///
/// The waveform/signal machinery stays outside the model; implementors
/// bridge to however the design is driven (e.g. a cocotb-style testbench).
/// Any unresolved or undefined hardware bit must be resolved to 0 before
/// being returned from `pc` or `reg`.
pub trait DutState {
    /// Advances the design by one clock cycle and lets it settle.
    fn settle(&mut self);

    /// The design's committed program counter.
    fn pc(&self) -> u32;

    /// The design's register file lane `index` (0-31).
    fn reg(&self, index: usize) -> u32;
}

/// A divergence between the model and the hardware design under test.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Mismatch {
    /// Program counters differ.
    #[error("pc mismatch: model={model:#010x}, dut={dut:#010x}")]
    Pc {
        /// The model's PC after the step.
        model: u32,
        /// The hardware PC after the cycle.
        dut: u32,
    },

    /// A register file lane differs.
    #[error("x{index} mismatch: model={model:#010x}, dut={dut:#010x}")]
    Register {
        /// Register index (0-31).
        index: usize,
        /// The model's value after the step.
        model: u32,
        /// The hardware value after the cycle.
        dut: u32,
    },
}

/// Everything that can end a run early.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RunError {
    /// The PC walked past the end of the instruction image.
    #[error("fetch past the end of the instruction image at pc {pc:#010x}")]
    FetchOutOfRange {
        /// The out-of-range program counter.
        pc: u32,
    },

    /// A fatal execution fault in the model itself.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// The hardware diverged from the model.
    #[error("verification failed: {0}")]
    Mismatch(#[from] Mismatch),
}

/// Compares the model state against the design under test.
///
/// Checks the PC first, then every register lane in order; the first
/// divergence is returned and logged. [`DutState`] implementors resolve
/// undefined hardware bits to 0, so the comparison itself is exact.
///
/// # Errors
///
/// The first [`Mismatch`] found, if any.
pub fn compare_state<D: DutState>(cpu: &Cpu, dut: &D) -> Result<(), Mismatch> {
    let dut_pc = dut.pc();
    if dut_pc != cpu.pc {
        let m = Mismatch::Pc {
            model: cpu.pc,
            dut: dut_pc,
        };
        error!(%m, "state divergence");
        return Err(m);
    }

    for index in 0..32 {
        let model = cpu.regs.read(index);
        let dut_val = dut.reg(index);
        if model != dut_val {
            let m = Mismatch::Register {
                index,
                model,
                dut: dut_val,
            };
            error!(%m, "state divergence");
            return Err(m);
        }
    }
    Ok(())
}
