//! PWM interface trait
//!
//! This module defines the pulse-width modulation interface the motor
//! drive modulates through.

use crate::platform::Result;

/// PWM channel configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PwmConfig {
    /// Carrier frequency in Hz
    pub frequency: u32,
    /// Initial duty cycle (0.0 to 1.0)
    pub duty_cycle: f32,
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            frequency: 20_000,
            duty_cycle: 0.0,
        }
    }
}

/// PWM interface trait
///
/// Platform implementations must provide this interface for PWM generation.
///
/// # Safety Invariants
///
/// - PWM channel must be initialized before use
/// - Duty cycle written while the channel is disabled takes effect on the
///   next enable
pub trait PwmInterface {
    /// Set duty cycle (0.0 = always low, 1.0 = always high)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm(PwmError::InvalidDutyCycle)` if the
    /// value is outside 0.0..=1.0.
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()>;

    /// Get current duty cycle
    fn duty_cycle(&self) -> f32;

    /// Set carrier frequency in Hz
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm(PwmError::InvalidFrequency)` if the
    /// frequency is zero or unsupported.
    fn set_frequency(&mut self, frequency: u32) -> Result<()>;

    /// Get current carrier frequency in Hz
    fn frequency(&self) -> u32;

    /// Start PWM output
    fn enable(&mut self);

    /// Stop PWM output
    fn disable(&mut self);

    /// Check whether PWM output is running
    fn is_enabled(&self) -> bool;
}
