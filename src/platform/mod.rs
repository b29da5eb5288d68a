//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the robot's peripherals.
//! All MCU-specific code lives behind these traits; the control core never
//! touches registers directly.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{
    AdcInterface, GpioInterface, PwmInterface, QeiInterface, TimerInterface, UartInterface,
};
