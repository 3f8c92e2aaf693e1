//! Byte-addressable memory.
//!
//! A fixed-capacity byte buffer supporting bounds-checked 1/2/4-byte and
//! arbitrary-length byte-range accesses. Multi-byte accesses are
//! little-endian. Every access is checked over its full requested span
//! against `[0, capacity)`; an out-of-range access is an error, never
//! silently truncated or wrapped. No alignment requirement is enforced
//! beyond the bounds check — the hardware design under test may itself
//! require alignment, this model does not.

use crate::common::error::MemoryError;

/// Fixed-capacity byte-addressable memory.
#[derive(Clone, Debug)]
pub struct ByteMemory {
    bytes: Vec<u8>,
}

impl ByteMemory {
    /// Creates a zero-filled memory of the given capacity.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Size of the memory in bytes; fixed for the lifetime
    ///   of the instance.
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: vec![0; capacity],
        }
    }

    /// Returns the capacity of the memory in bytes.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Checks that `[addr, addr + len)` lies within `[0, capacity)`.
    fn check(&self, addr: u32, len: usize) -> Result<usize, MemoryError> {
        let start = addr as usize;
        let ok = start
            .checked_add(len)
            .is_some_and(|end| end <= self.bytes.len());
        if ok {
            Ok(start)
        } else {
            Err(MemoryError::OutOfRange {
                addr,
                len,
                capacity: self.bytes.len(),
            })
        }
    }

    /// Reads `len` bytes starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfRange`] when the span leaves the memory.
    pub fn read_bytes(&self, addr: u32, len: usize) -> Result<&[u8], MemoryError> {
        let start = self.check(addr, len)?;
        Ok(&self.bytes[start..start + len])
    }

    /// Writes `data` starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfRange`] when the span leaves the memory.
    pub fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), MemoryError> {
        let start = self.check(addr, data.len())?;
        self.bytes[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }

    /// Reads a little-endian 32-bit word.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfRange`] when the 4-byte span leaves the
    /// memory.
    pub fn read_u32(&self, addr: u32) -> Result<u32, MemoryError> {
        let start = self.check(addr, 4)?;
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.bytes[start..start + 4]);
        Ok(u32::from_le_bytes(word))
    }

    /// Writes a little-endian 32-bit word.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfRange`] when the 4-byte span leaves the
    /// memory.
    pub fn write_u32(&mut self, addr: u32, value: u32) -> Result<(), MemoryError> {
        self.write_bytes(addr, &value.to_le_bytes())
    }
}
