//! Quadrature encoder interface trait
//!
//! This module defines the interface to the hardware quadrature decoders
//! that track wheel position and capture pulse counts over a fixed
//! velocity window.

/// Rotation direction reported by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QeiDirection {
    /// Counting up (wheel driving the robot forward)
    Forward,
    /// Counting down
    Reverse,
}

impl QeiDirection {
    /// Sign factor applied to unsigned pulse counts
    pub fn sign(self) -> i32 {
        match self {
            QeiDirection::Forward => 1,
            QeiDirection::Reverse => -1,
        }
    }
}

/// Quadrature encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QeiConfig {
    /// Position wraps to zero past this count (two wheel revolutions)
    pub max_position: u32,
    /// Velocity capture window in milliseconds
    pub velocity_window_ms: u32,
}

impl Default for QeiConfig {
    fn default() -> Self {
        Self {
            max_position: 29_000,
            velocity_window_ms: 20,
        }
    }
}

/// Quadrature encoder interface trait
///
/// Platform implementations provide one instance per driven axle. The
/// decoder counts edges continuously and latches a pulse count at the end
/// of every velocity window; the window-expiry interrupt handler reads
/// `velocity_pulses` and `direction` and publishes the signed product.
///
/// # Safety Invariants
///
/// - Decoder must be initialized before use
/// - `velocity_pulses` returns the count for the most recently completed
///   window, not a running total
pub trait QeiInterface {
    /// Current absolute wheel position in pulses
    ///
    /// Wraps to zero past the configured maximum.
    fn position(&self) -> u32;

    /// Pulse count captured over the last completed velocity window
    fn velocity_pulses(&self) -> u32;

    /// Rotation direction over the last completed velocity window
    fn direction(&self) -> QeiDirection;
}
