//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be
//! used for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! use tiva_trail::platform::mock::MockUart;
//! use tiva_trail::platform::traits::UartInterface;
//!
//! let mut uart = MockUart::new(Default::default());
//! uart.write(b"test").unwrap();
//! assert_eq!(uart.tx_buffer(), b"test");
//! ```

#![cfg(any(test, feature = "mock"))]

mod adc;
mod gpio;
mod pwm;
mod qei;
mod timer;
mod uart;

pub use adc::MockAdc;
pub use gpio::MockGpio;
pub use pwm::MockPwm;
pub use qei::MockQei;
pub use timer::MockTimer;
pub use uart::MockUart;
