//! Dual H-bridge drive implementation
//!
//! This module implements symmetric speed control for a two-motor drive
//! behind an L298-style H-bridge: one PWM channel and one driver enable
//! line per side, both sides always running the same duty.
//!
//! The bridge only powers the motors while its enable lines are high, so
//! the drive comes up inert and stays that way until the control loop
//! explicitly enables it. Duty changes written while disabled are retained
//! by the PWM hardware and take effect the moment the bridge is enabled.

use super::{AdjustLevel, DriveConfig, DriveInterface, MotorError};
use crate::platform::traits::{GpioInterface, PwmInterface};

/// Dual H-bridge motor drive
///
/// Owns both PWM channels and both enable lines. The carrier runs from
/// construction; motor power is gated by the enable lines alone.
///
/// # Type Parameters
///
/// * `P1` / `P2` - PWM channel types for the left / right motor
/// * `E1` / `E2` - GPIO types for the left / right driver enable line
pub struct HBridgeDrive<P1, P2, E1, E2>
where
    P1: PwmInterface,
    P2: PwmInterface,
    E1: GpioInterface,
    E2: GpioInterface,
{
    left_pwm: P1,
    right_pwm: P2,
    left_enable: E1,
    right_enable: E2,
    enabled: bool,
}

impl<P1, P2, E1, E2> HBridgeDrive<P1, P2, E1, E2>
where
    P1: PwmInterface,
    P2: PwmInterface,
    E1: GpioInterface,
    E2: GpioInterface,
{
    /// Create a new drive over initialized PWM channels and enable lines
    ///
    /// Programs the carrier frequency on both channels, starts the carrier,
    /// and forces the bridge into the disabled state.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::HardwareFault` if a channel rejects the carrier
    /// frequency or an enable line cannot be driven.
    pub fn new(
        left_pwm: P1,
        right_pwm: P2,
        left_enable: E1,
        right_enable: E2,
        config: DriveConfig,
    ) -> Result<Self, MotorError> {
        let mut drive = Self {
            left_pwm,
            right_pwm,
            left_enable,
            right_enable,
            enabled: false,
        };

        drive
            .left_pwm
            .set_frequency(config.frequency)
            .map_err(|_| MotorError::HardwareFault)?;
        drive
            .right_pwm
            .set_frequency(config.frequency)
            .map_err(|_| MotorError::HardwareFault)?;

        // Carrier runs from here on; the enable lines gate motor power
        drive.left_pwm.enable();
        drive.right_pwm.enable();
        drive.set_enabled(false)?;

        Ok(drive)
    }

    /// Immutable access to the PWM channels (left, right) for inspection
    pub fn channels(&self) -> (&P1, &P2) {
        (&self.left_pwm, &self.right_pwm)
    }
}

impl<P1, P2, E1, E2> DriveInterface for HBridgeDrive<P1, P2, E1, E2>
where
    P1: PwmInterface,
    P2: PwmInterface,
    E1: GpioInterface,
    E2: GpioInterface,
{
    #[inline]
    fn set_adjust(&mut self, level: AdjustLevel) -> Result<(), MotorError> {
        let duty = level.duty_fraction();
        crate::log_debug!("drive adjust -> {}", level.permille());

        self.left_pwm
            .set_duty_cycle(duty)
            .map_err(|_| MotorError::HardwareFault)?;
        self.right_pwm
            .set_duty_cycle(duty)
            .map_err(|_| MotorError::HardwareFault)?;
        Ok(())
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<(), MotorError> {
        if enabled {
            self.left_enable
                .set_high()
                .map_err(|_| MotorError::HardwareFault)?;
            self.right_enable
                .set_high()
                .map_err(|_| MotorError::HardwareFault)?;
        } else {
            self.left_enable
                .set_low()
                .map_err(|_| MotorError::HardwareFault)?;
            self.right_enable
                .set_low()
                .map_err(|_| MotorError::HardwareFault)?;
        }
        self.enabled = enabled;
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockGpio, MockPwm};
    use crate::platform::traits::PwmConfig;

    fn test_drive() -> HBridgeDrive<MockPwm, MockPwm, MockGpio, MockGpio> {
        HBridgeDrive::new(
            MockPwm::new(PwmConfig::default()),
            MockPwm::new(PwmConfig::default()),
            MockGpio::new_output(),
            MockGpio::new_output(),
            DriveConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_drive_starts_disabled_with_carrier_running() {
        let drive = test_drive();
        assert!(!drive.is_enabled());

        let (left, right) = drive.channels();
        assert!(left.is_enabled());
        assert!(right.is_enabled());
        assert_eq!(left.frequency(), 20_000);
        assert_eq!(right.frequency(), 20_000);
    }

    #[test]
    fn test_drive_set_adjust_mirrors_both_channels() {
        let mut drive = test_drive();
        drive.set_adjust(AdjustLevel::INITIAL).unwrap();

        let (left, right) = drive.channels();
        assert!((left.duty_cycle() - 0.5).abs() < 1e-6);
        assert!((right.duty_cycle() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_drive_set_adjust_tracks_level() {
        let mut drive = test_drive();
        let level = AdjustLevel::INITIAL.decreased().decreased();
        drive.set_adjust(level).unwrap();

        let (left, right) = drive.channels();
        assert!((left.duty_cycle() - 0.46).abs() < 1e-6);
        assert!((right.duty_cycle() - 0.46).abs() < 1e-6);
    }

    #[test]
    fn test_drive_enable_round_trip() {
        let mut drive = test_drive();

        drive.set_enabled(true).unwrap();
        assert!(drive.is_enabled());

        drive.set_enabled(false).unwrap();
        assert!(!drive.is_enabled());
    }

    #[test]
    fn test_drive_duty_retained_while_disabled() {
        let mut drive = test_drive();
        drive.set_adjust(AdjustLevel::MAX).unwrap();
        assert!(!drive.is_enabled());

        // Duty survives the later enable
        drive.set_enabled(true).unwrap();
        let (left, _) = drive.channels();
        assert!((left.duty_cycle() - 0.95).abs() < 1e-6);
    }
}
