//! Motor driver abstraction
//!
//! This module provides speed control for the robot's two drive motors via a
//! dual H-bridge, where both motors always receive the same PWM duty and the
//! operator trims that duty up and down in fixed steps.
//!
//! ## Features
//!
//! - `AdjustLevel`: permille trim level with step and clamp arithmetic
//! - `DriveInterface`: the drive seam the control loop consumes
//! - `HBridgeDrive`: dual PWM channels plus driver enable lines
//! - Outputs held inert until the drive is explicitly enabled
//!
//! ## Example
//!
//! ```
//! use tiva_trail::libraries::motor_driver::{
//!     AdjustLevel, DriveConfig, DriveInterface, HBridgeDrive,
//! };
//! use tiva_trail::platform::mock::{MockGpio, MockPwm};
//!
//! let mut drive = HBridgeDrive::new(
//!     MockPwm::new(Default::default()),
//!     MockPwm::new(Default::default()),
//!     MockGpio::new_output(),
//!     MockGpio::new_output(),
//!     DriveConfig::default(),
//! )
//! .unwrap();
//!
//! drive.set_adjust(AdjustLevel::INITIAL).unwrap();
//! drive.set_enabled(true).unwrap();
//! assert!(drive.is_enabled());
//! ```

pub mod hbridge;

// Re-export main types
pub use hbridge::HBridgeDrive;

/// Motor control error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Trim level outside the permille scale
    InvalidLevel,
    /// PWM channel or enable line failure
    HardwareFault,
}

/// Drive configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveConfig {
    /// PWM carrier frequency in Hz for both channels
    pub frequency: u32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self { frequency: 20_000 }
    }
}

/// Drive operations the control loop consumes
pub trait DriveInterface {
    /// Apply a trim level as the PWM duty on both channels
    ///
    /// # Errors
    ///
    /// Returns `MotorError::HardwareFault` if either channel rejects the
    /// duty cycle.
    fn set_adjust(&mut self, level: AdjustLevel) -> Result<(), MotorError>;

    /// Drive both enable lines, powering or cutting the bridge outputs
    ///
    /// # Errors
    ///
    /// Returns `MotorError::HardwareFault` if an enable line cannot be
    /// driven.
    fn set_enabled(&mut self, enabled: bool) -> Result<(), MotorError>;

    /// Whether the bridge outputs are currently powered
    fn is_enabled(&self) -> bool;
}

/// Operator-selected motor trim level in permille of full duty
///
/// Both motors run at this level; steering is not differential. The level
/// starts at half scale and moves in fixed steps, hard-clamped to a band
/// that keeps the motors turning without saturating the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdjustLevel(u16);

impl AdjustLevel {
    /// Power-on level (half scale)
    pub const INITIAL: Self = Self(500);
    /// Lowest selectable level
    pub const MIN: Self = Self(50);
    /// Highest selectable level
    pub const MAX: Self = Self(950);
    /// Amount one press moves the level
    pub const STEP: u16 = 20;

    /// Create a level from a raw permille value
    ///
    /// # Errors
    ///
    /// Returns `MotorError::InvalidLevel` if `raw` exceeds the permille
    /// scale (1000).
    pub fn new(raw: u16) -> Result<Self, MotorError> {
        if raw > 1000 {
            return Err(MotorError::InvalidLevel);
        }
        Ok(Self(raw))
    }

    /// Raw permille value
    pub fn permille(self) -> u16 {
        self.0
    }

    /// Duty cycle fraction applied to the PWM channels
    pub fn duty_fraction(self) -> f32 {
        self.0 as f32 / 1000.0
    }

    /// One step down, clamped to the selectable floor
    #[must_use]
    pub fn decreased(self) -> Self {
        Self(self.0.saturating_sub(Self::STEP).max(Self::MIN.0))
    }

    /// One step up, clamped to the selectable ceiling
    #[must_use]
    pub fn increased(self) -> Self {
        Self((self.0 + Self::STEP).min(Self::MAX.0))
    }
}

impl Default for AdjustLevel {
    fn default() -> Self {
        Self::INITIAL
    }
}
