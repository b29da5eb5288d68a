//! Timer interface trait
//!
//! This module defines blocking delays and a monotonic clock.

use crate::platform::Result;

/// Timer interface trait
///
/// Platform implementations must provide this interface for delays and
/// timestamps. The control loop uses delays for control settle time and
/// loop pacing, never for velocity capture (the decoder hardware owns
/// that window).
pub trait TimerInterface {
    /// Block for the given number of microseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the delay cannot be programmed.
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    /// Microseconds since an arbitrary epoch
    fn now_us(&self) -> u64;

    /// Milliseconds since an arbitrary epoch
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}
