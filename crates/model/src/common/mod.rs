//! Common types shared across the reference model.
//!
//! Holds the error taxonomy of the core: memory faults and execution faults.
//! Both are unconditionally fatal to the current run; the model's purpose is
//! to catch incorrect behavior deterministically, so there is no recovery
//! path.

/// Error types for memory and execution faults.
pub mod error;

pub use error::{ExecError, MemoryError};
