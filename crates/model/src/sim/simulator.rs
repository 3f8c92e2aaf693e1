//! Run loop: owns the CPU and the program image side by side.
//!
//! The model is single-threaded and synchronous: fetch, decode, and step
//! run to completion before the next instruction is considered. The only
//! suspension point belongs to the caller — the clock-advance primitive
//! used to let the hardware design under test settle between steps.

use tracing::debug;

use crate::config::Config;
use crate::core::Cpu;
use crate::isa::decode::decode;
use crate::sim::image::ProgramImage;
use crate::sim::verify::{self, DutState, RunError};

/// Outcome of one call to [`Simulator::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// One instruction was decoded and executed.
    Executed,
    /// A zero instruction word was fetched: the program is over.
    Halted,
}

/// Top-level runner: CPU architectural state plus the instruction image.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, PC, memory, UART).
    pub cpu: Cpu,
    image: ProgramImage,
    steps: u64,
}

impl Simulator {
    /// Creates a simulator for one program run.
    ///
    /// # Arguments
    ///
    /// * `image` - The parsed instruction image, already padded to the
    ///   memory depth.
    /// * `config` - Run configuration (memory capacity, tracing).
    pub fn new(image: ProgramImage, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            image,
            steps: 0,
        }
    }

    /// Number of instructions retired so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Fetches, decodes, and executes one instruction.
    ///
    /// A zero word at the PC halts the run; it is the image terminator, not
    /// an error.
    ///
    /// # Errors
    ///
    /// [`RunError::FetchOutOfRange`] when the PC walks past the image, or
    /// any fatal [`crate::common::ExecError`] from the engine.
    pub fn step(&mut self) -> Result<StepOutcome, RunError> {
        let pc = self.cpu.pc;
        let word = self
            .image
            .word_at(pc)
            .ok_or(RunError::FetchOutOfRange { pc })?;

        if word == 0 {
            debug!(pc = format_args!("{pc:#010x}"), "zero word: halt");
            return Ok(StepOutcome::Halted);
        }

        let inst = decode(word);
        self.cpu.step(&inst)?;
        self.steps += 1;
        Ok(StepOutcome::Executed)
    }

    /// Runs the model alone until the terminating zero word.
    ///
    /// # Errors
    ///
    /// Propagates the first [`RunError`]; there is no recovery path.
    ///
    /// # Returns
    ///
    /// The number of instructions retired.
    pub fn run(&mut self) -> Result<u64, RunError> {
        loop {
            if self.step()? == StepOutcome::Halted {
                return Ok(self.steps);
            }
        }
    }

    /// Runs the model in lockstep with the hardware design under test.
    ///
    /// Per instruction: the model steps, the design settles one clock
    /// cycle, then PC and all 32 registers are compared. The caller must
    /// hold the one-step-per-cycle contract — `settle` is invoked exactly
    /// once per model step.
    ///
    /// # Errors
    ///
    /// The first [`RunError`], including [`RunError::Mismatch`] when the
    /// hardware diverges; verification is terminal on mismatch.
    ///
    /// # Returns
    ///
    /// The number of instructions verified.
    pub fn run_against<D: DutState>(&mut self, dut: &mut D) -> Result<u64, RunError> {
        loop {
            if self.step()? == StepOutcome::Halted {
                return Ok(self.steps);
            }
            dut.settle();
            verify::compare_state(&self.cpu, dut)?;
        }
    }
}
