//! Mock quadrature encoder implementation for testing

use crate::platform::traits::{QeiConfig, QeiDirection, QeiInterface};

/// Mock quadrature encoder
///
/// Position, window pulse count, and direction are set directly by tests
/// to stand in for the decoder hardware.
#[derive(Debug)]
pub struct MockQei {
    config: QeiConfig,
    position: u32,
    velocity_pulses: u32,
    direction: QeiDirection,
}

impl MockQei {
    /// Create a new mock encoder at position zero, not moving
    pub fn new(config: QeiConfig) -> Self {
        Self {
            config,
            position: 0,
            velocity_pulses: 0,
            direction: QeiDirection::Forward,
        }
    }

    /// Set the absolute position, wrapping at the configured maximum
    pub fn set_position(&mut self, position: u32) {
        self.position = position % self.config.max_position;
    }

    /// Set the pulse count and direction for the last velocity window
    pub fn set_velocity(&mut self, pulses: u32, direction: QeiDirection) {
        self.velocity_pulses = pulses;
        self.direction = direction;
    }
}

impl Default for MockQei {
    fn default() -> Self {
        Self::new(QeiConfig::default())
    }
}

impl QeiInterface for MockQei {
    fn position(&self) -> u32 {
        self.position
    }

    fn velocity_pulses(&self) -> u32 {
        self.velocity_pulses
    }

    fn direction(&self) -> QeiDirection {
        self.direction
    }
}
