//! Mock Timer implementation for testing

use crate::platform::{Result, traits::TimerInterface};

/// Mock Timer implementation
///
/// Accumulates simulated time instead of blocking, so loop-pacing tests
/// can assert how long the control loop would have slept.
#[derive(Debug)]
pub struct MockTimer {
    elapsed_us: u64,
}

impl MockTimer {
    /// Create a new mock timer
    pub fn new() -> Self {
        Self { elapsed_us: 0 }
    }
}

impl Default for MockTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        // Simulated time only; nothing sleeps in test builds
        self.elapsed_us = self.elapsed_us.wrapping_add(us as u64);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.elapsed_us
    }
}
