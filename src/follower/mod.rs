//! Line-following control core
//!
//! The control core cycles through three operator-selected modes:
//!
//! 1. `Calibrate`: record reflectance reference rows for the black and
//!    white surfaces, one log press per row
//! 2. `Diagnostic`: stream thresholded sensor sweeps for bring-up checks
//! 3. `LineFollow`: power the drive, take trim presses, and report axle
//!    odometry
//!
//! Mode select advances through the sequence and stops at `LineFollow`;
//! further presses only flash the hold color. All panel inputs are read as
//! levels and the settle delay after an accepted press is the only bounce
//! suppression, so a switch held across delay periods repeats.

pub mod indicator;
pub mod panel;

// Re-export main types
pub use indicator::{LedColor, StatusLed};
pub use panel::ControlPanel;

use core::fmt;

use crate::libraries::encoder::{Axle, VelocityMailbox};
use crate::libraries::line_sensor::{CalibrationStore, CalibrationTarget, LineSignature, encode};
use crate::libraries::motor_driver::{AdjustLevel, DriveInterface, MotorError};
use crate::platform::PlatformError;
use crate::platform::traits::{AdcInterface, GpioInterface, QeiInterface, TimerInterface};
use crate::telemetry::Console;

/// Operating modes, in selection order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Record reflectance references for both surfaces
    Calibrate,
    /// Stream thresholded sensor sweeps
    Diagnostic,
    /// Drive the motors and report odometry
    LineFollow,
}

impl Mode {
    /// Next mode in the selection sequence
    ///
    /// The sequence does not wrap; `LineFollow` yields itself.
    pub fn next(self) -> Self {
        match self {
            Self::Calibrate => Self::Diagnostic,
            Self::Diagnostic => Self::LineFollow,
            Self::LineFollow => Self::LineFollow,
        }
    }

    /// Whether mode-select presses stop advancing here
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::LineFollow)
    }

    /// Mode name for log output
    pub fn name(self) -> &'static str {
        match self {
            Self::Calibrate => "calibrate",
            Self::Diagnostic => "diagnostic",
            Self::LineFollow => "line-follow",
        }
    }

    /// Status LED color advertised while this mode is active
    pub fn status_color(self) -> LedColor {
        match self {
            Self::Calibrate | Self::LineFollow => LedColor::Red,
            Self::Diagnostic => LedColor::Green,
        }
    }
}

/// Control loop timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowerConfig {
    /// Pause after an accepted mode or log press, in milliseconds
    pub settle_delay_ms: u32,
    /// Pause after each diagnostic sweep, in microseconds
    pub diagnostic_delay_us: u32,
    /// Pause at the end of each line-follow pass, in milliseconds
    pub follow_delay_ms: u32,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 375,
            diagnostic_delay_us: 75,
            follow_delay_ms: 375,
        }
    }
}

/// Control loop errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError {
    /// A platform peripheral failed
    Platform(PlatformError),
    /// The motor drive failed
    Motor(MotorError),
}

impl From<PlatformError> for ControlError {
    fn from(err: PlatformError) -> Self {
        Self::Platform(err)
    }
}

impl From<MotorError> for ControlError {
    fn from(err: MotorError) -> Self {
        Self::Motor(err)
    }
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::Platform(e) => write!(f, "platform error: {}", e),
            ControlError::Motor(e) => write!(f, "motor error: {:?}", e),
        }
    }
}

/// Line-following control core
///
/// Owns every seam of the robot: drive, sensor frontend, operator panel,
/// status LED, axle decoders, loop timer, and console. Mode, trim, and
/// calibration state all live here; the velocity mailboxes are borrowed
/// because the decoder interrupts share them.
///
/// # Type Parameters
///
/// * `D` - Motor drive
/// * `A` - Reflectance sensor frontend
/// * `G` - GPIO type shared by the panel inputs and LED channels
/// * `Q` - Axle decoder type
/// * `T` - Loop pacing timer
/// * `C` - Operator console
pub struct LineFollower<'a, D, A, G, Q, T, C>
where
    D: DriveInterface,
    A: AdcInterface,
    G: GpioInterface,
    Q: QeiInterface,
    T: TimerInterface,
    C: Console,
{
    drive: D,
    adc: A,
    panel: ControlPanel<G>,
    indicator: StatusLed<G>,
    left_qei: Q,
    right_qei: Q,
    left_velocity: &'a VelocityMailbox,
    right_velocity: &'a VelocityMailbox,
    timer: T,
    console: C,
    config: FollowerConfig,
    mode: Mode,
    target: CalibrationTarget,
    adjust: AdjustLevel,
    calibration: CalibrationStore,
    signature: LineSignature,
}

impl<'a, D, A, G, Q, T, C> LineFollower<'a, D, A, G, Q, T, C>
where
    D: DriveInterface,
    A: AdcInterface,
    G: GpioInterface,
    Q: QeiInterface,
    T: TimerInterface,
    C: Console,
{
    /// Create a control core over initialized peripherals
    ///
    /// The core starts in `Calibrate` mode with the trim level at half
    /// scale and a black row prompted first. Call `init` before the first
    /// `poll` to advertise that state.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        drive: D,
        adc: A,
        panel: ControlPanel<G>,
        indicator: StatusLed<G>,
        left_qei: Q,
        right_qei: Q,
        left_velocity: &'a VelocityMailbox,
        right_velocity: &'a VelocityMailbox,
        timer: T,
        console: C,
        config: FollowerConfig,
    ) -> Self {
        Self {
            drive,
            adc,
            panel,
            indicator,
            left_qei,
            right_qei,
            left_velocity,
            right_velocity,
            timer,
            console,
            config,
            mode: Mode::Calibrate,
            target: CalibrationTarget::Black,
            adjust: AdjustLevel::INITIAL,
            calibration: CalibrationStore::new(),
            signature: LineSignature::default(),
        }
    }

    /// Advertise the startup state and hold the drive off
    ///
    /// Applies the initial trim to the PWM channels, lights the calibrate
    /// status color, prints the mode banner and the first surface prompt,
    /// and forces the bridge outputs off.
    ///
    /// # Errors
    ///
    /// Returns the first peripheral or drive failure.
    pub fn init(&mut self) -> Result<(), ControlError> {
        crate::log_info!("control core starting in {} mode", self.mode.name());

        self.drive.set_adjust(self.adjust)?;
        self.indicator.show(self.mode.status_color())?;
        self.console.mode_banner(self.mode)?;
        self.console.calibration_prompt(self.target)?;
        self.drive.set_enabled(false)?;
        Ok(())
    }

    /// Execute one control pass
    ///
    /// Handles a pending mode-select press first, then runs the body of
    /// whichever mode is now active, so a mode entered by the press gets
    /// its first pass immediately.
    ///
    /// # Errors
    ///
    /// Returns the first peripheral or drive failure; state changes made
    /// earlier in the pass are kept.
    pub fn poll(&mut self) -> Result<(), ControlError> {
        if self.panel.mode_select_pressed() {
            self.handle_mode_select()?;
        }

        match self.mode {
            Mode::Calibrate => self.calibrate_pass(),
            Mode::Diagnostic => self.diagnostic_pass(),
            Mode::LineFollow => self.line_follow_pass(),
        }
    }

    /// Run the control loop forever
    ///
    /// Pass failures are logged and the loop continues; a control pass
    /// has no state worth unwinding.
    pub fn run(&mut self) -> ! {
        loop {
            if let Err(_err) = self.poll() {
                crate::log_error!("control pass failed: {}", _err);
            }
        }
    }

    fn handle_mode_select(&mut self) -> Result<(), ControlError> {
        if self.mode.is_terminal() {
            // Repeat presses only flash the hold color
            self.indicator.show(LedColor::Blue)?;
        } else {
            self.enter_mode(self.mode.next())?;
        }
        self.timer.delay_ms(self.config.settle_delay_ms)?;
        Ok(())
    }

    fn enter_mode(&mut self, mode: Mode) -> Result<(), ControlError> {
        self.mode = mode;
        crate::log_info!("entering {} mode", mode.name());

        self.indicator.show(mode.status_color())?;
        self.console.mode_banner(mode)?;

        if mode == Mode::LineFollow {
            // Power the bridge, then restate the trim on both channels
            self.drive.set_enabled(true)?;
            self.drive.set_adjust(self.adjust)?;
        }
        Ok(())
    }

    fn calibrate_pass(&mut self) -> Result<(), ControlError> {
        if !self.panel.log_pressed() {
            return Ok(());
        }

        let readings = self.adc.scan();
        self.calibration.record(self.target, readings);
        self.console.calibration_row(&readings)?;

        self.target = self.target.toggled();
        self.console.calibration_prompt(self.target)?;
        self.timer.delay_ms(self.config.settle_delay_ms)?;
        Ok(())
    }

    fn diagnostic_pass(&mut self) -> Result<(), ControlError> {
        let readings = self.adc.scan();
        self.signature = encode(&readings, self.calibration.white());

        self.console.line_signature(self.signature)?;
        self.timer.delay_us(self.config.diagnostic_delay_us)?;
        Ok(())
    }

    fn line_follow_pass(&mut self) -> Result<(), ControlError> {
        let readings = self.adc.scan();
        // Retained every pass; steering does not consume it yet
        self.signature = encode(&readings, self.calibration.white());

        if self.panel.decrease_pressed() {
            self.adjust = self.adjust.decreased();
            self.drive.set_adjust(self.adjust)?;
        }
        if self.panel.increase_pressed() {
            self.adjust = self.adjust.increased();
            self.drive.set_adjust(self.adjust)?;
        }

        self.report_axle(Axle::Left)?;
        self.report_axle(Axle::Right)?;

        self.timer.delay_ms(self.config.follow_delay_ms)?;
        Ok(())
    }

    fn report_axle(&mut self, axle: Axle) -> Result<(), ControlError> {
        let (mailbox, qei) = match axle {
            Axle::Left => (self.left_velocity, &self.left_qei),
            Axle::Right => (self.right_velocity, &self.right_qei),
        };

        // Stale windows stay silent; only a sample latched since the last
        // take is worth reporting
        if let Some(velocity) = mailbox.try_take() {
            let position = qei.position();
            self.console.axle_report(axle, velocity, position)?;
        }
        Ok(())
    }

    /// Currently active mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current motor trim level
    pub fn adjust(&self) -> AdjustLevel {
        self.adjust
    }

    /// Surface the next log press will record
    pub fn calibration_target(&self) -> CalibrationTarget {
        self.target
    }

    /// Recorded calibration reference rows
    pub fn calibration(&self) -> &CalibrationStore {
        &self.calibration
    }

    /// Most recent thresholded sweep
    pub fn line_signature(&self) -> LineSignature {
        self.signature
    }

    /// Immutable access to the drive (for inspection)
    pub fn drive(&self) -> &D {
        &self.drive
    }

    /// Immutable access to the console (for inspection)
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Immutable access to the status indicator (for inspection)
    pub fn indicator(&self) -> &StatusLed<G> {
        &self.indicator
    }

    /// Immutable access to the loop timer (for inspection)
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Mutable access to the control panel (for test stimulus)
    pub fn panel_mut(&mut self) -> &mut ControlPanel<G> {
        &mut self.panel
    }

    /// Mutable access to the sensor frontend (for test stimulus)
    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }

    /// Mutable access to one axle decoder (for test stimulus)
    pub fn qei_mut(&mut self, axle: Axle) -> &mut Q {
        match axle {
            Axle::Left => &mut self.left_qei,
            Axle::Right => &mut self.right_qei,
        }
    }
}
