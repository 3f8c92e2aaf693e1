//! Simulation: program image, run loop, and the hardware comparison
//! boundary.
//!
//! The model never touches the design under test directly; everything it
//! needs from the hardware side arrives through the narrow
//! [`verify::DutState`] interface.

/// Hex instruction-image parsing.
pub mod image;

/// Run loop: owns the CPU and the program image.
pub mod simulator;

/// Comparison boundary against the hardware design under test.
pub mod verify;

pub use image::ProgramImage;
pub use simulator::{Simulator, StepOutcome};
pub use verify::{DutState, Mismatch, RunError};
