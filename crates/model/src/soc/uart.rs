//! Memory-mapped UART.
//!
//! The companion design carves two word addresses out of the data memory:
//! a transmit port and a receive port. A store to the transmit address
//! emits its low byte as an output character and leaves memory untouched;
//! a load from the receive address returns the FIFO-empty sentinel (the
//! design's receive FIFO is modeled permanently empty).
//!
//! These addresses and the sentinel are global invariants of this one
//! design; the execution engine checks them explicitly before the memory
//! bounds check.

use tracing::info;

/// Word address of the UART transmit port.
pub const UART_TX_ADDR: u32 = 0x0000_0400;

/// Word address of the UART receive port.
pub const UART_RX_ADDR: u32 = 0x0000_0404;

/// Sentinel returned by a receive-port load: FIFO empty.
pub const RX_EMPTY: u32 = 0xFFFF_FFFF;

/// UART device model.
///
/// Keeps the full transmitted byte stream so a verification run can inspect
/// the side-channel output after the fact.
#[derive(Clone, Debug, Default)]
pub struct Uart {
    tx_log: Vec<u8>,
}

impl Uart {
    /// Creates a UART with an empty transmit log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transmits one byte: appends it to the TX log and emits a tracing
    /// event with its character rendering.
    pub fn transmit(&mut self, byte: u8) {
        info!(
            byte = format_args!("{byte:#04x}"),
            ch = %(byte as char),
            "uart tx"
        );
        self.tx_log.push(byte);
    }

    /// Services a receive-port load.
    ///
    /// The receive FIFO is modeled permanently empty, so this always
    /// returns [`RX_EMPTY`].
    pub fn receive(&self) -> u32 {
        RX_EMPTY
    }

    /// Returns the bytes transmitted so far.
    pub fn output(&self) -> &[u8] {
        &self.tx_log
    }

    /// Takes the transmitted bytes, leaving the log empty.
    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.tx_log)
    }
}
