#![cfg_attr(not(test), no_std)]

//! tiva_trail - Control core for a two-motor line-following robot
//!
//! This library provides platform abstraction, reusable motor/sensor/encoder
//! libraries, and the calibrate / diagnostic / line-follow mode machine for
//! TM4C123-class trail robots.

// The mock peripherals buffer data with std collections.
#[cfg(any(test, feature = "mock"))]
extern crate std;

// Platform abstraction layer
pub mod platform;

// Core systems (logging)
pub mod core;

// Reusable robot libraries (motor drive, line sensor, encoders)
pub mod libraries;

// Operator console output
pub mod telemetry;

// Mode state machine and control loop
pub mod follower;
