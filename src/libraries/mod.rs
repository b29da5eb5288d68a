//! Common libraries
//!
//! This module contains robot-agnostic building blocks shared by the control
//! core, kept independent of any particular vehicle layout.
//!
//! ## Libraries
//!
//! - `encoder`: Per-axle velocity mailboxes fed by the decoder interrupts
//! - `line_sensor`: Reflectance calibration and line signature encoding
//! - `motor_driver`: Dual H-bridge drive with permille trim control

pub mod encoder;
pub mod line_sensor;
pub mod motor_driver;

// Re-export commonly used types
pub use encoder::{Axle, VelocityMailbox};
pub use line_sensor::{CalibrationStore, CalibrationTarget, LineSignature};
pub use motor_driver::{AdjustLevel, DriveConfig, DriveInterface, HBridgeDrive, MotorError};
