//! Mock UART implementation for testing

use crate::platform::{
    Result,
    traits::{UartConfig, UartInterface},
};
use std::vec::Vec;

/// Mock UART implementation
///
/// Captures transmitted bytes in memory so tests can verify console
/// output without hardware.
///
/// # Example
///
/// ```
/// use tiva_trail::platform::mock::MockUart;
/// use tiva_trail::platform::traits::UartInterface;
///
/// let mut uart = MockUart::new(Default::default());
/// uart.write(b"Hello").unwrap();
/// assert_eq!(uart.tx_buffer(), b"Hello");
/// ```
#[derive(Debug)]
pub struct MockUart {
    config: UartConfig,
    tx_buffer: Vec<u8>,
}

impl MockUart {
    /// Create a new mock UART
    pub fn new(config: UartConfig) -> Self {
        Self {
            config,
            tx_buffer: Vec::new(),
        }
    }

    /// Get transmitted data (for test verification)
    pub fn tx_buffer(&self) -> Vec<u8> {
        self.tx_buffer.clone()
    }

    /// Clear transmit buffer
    pub fn clear_tx_buffer(&mut self) {
        self.tx_buffer.clear();
    }

    /// Get current baud rate
    pub fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }
}

impl UartInterface for MockUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.tx_buffer.extend_from_slice(data);
        Ok(data.len())
    }

    fn set_baud_rate(&mut self, baud: u32) -> Result<()> {
        self.config.baud_rate = baud;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Nothing buffered downstream of the mock
        Ok(())
    }
}
