//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod adc;
pub mod gpio;
pub mod pwm;
pub mod qei;
pub mod timer;
pub mod uart;

// Re-export trait interfaces
pub use adc::{AdcInterface, ChannelReadings, SCAN_CHANNELS};
pub use gpio::{GpioInterface, GpioMode};
pub use pwm::{PwmConfig, PwmInterface};
pub use qei::{QeiConfig, QeiDirection, QeiInterface};
pub use timer::TimerInterface;
pub use uart::{UartConfig, UartInterface};
