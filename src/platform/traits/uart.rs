//! UART interface trait
//!
//! This module defines the byte sink the operator console writes through.
//! The console path is transmit-only; nothing in the control core reads
//! from the link.

use crate::platform::Result;

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baud_rate: u32,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self { baud_rate: 115_200 }
    }
}

/// UART interface trait
///
/// Platform implementations must provide this interface for serial output.
pub trait UartInterface {
    /// Write bytes, returning how many were accepted
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart(UartError::WriteFailed)` if the
    /// transmitter rejects the data.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Set the baud rate
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart(UartError::InvalidBaudRate)` if the
    /// rate is not supported.
    fn set_baud_rate(&mut self, baud: u32) -> Result<()>;

    /// Block until all accepted bytes have left the transmitter
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the transmitter reports a fault.
    fn flush(&mut self) -> Result<()>;
}
