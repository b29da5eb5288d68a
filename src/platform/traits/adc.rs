//! Analog sensor frontend trait
//!
//! This module defines the blocking multi-channel conversion interface the
//! reflectance sensor array is read through.

/// Number of analog channels captured per scan
pub const SCAN_CHANNELS: usize = 8;

/// One conversion result per channel, indexed by physical channel number
pub type ChannelReadings = [u16; SCAN_CHANNELS];

/// Analog scan interface trait
///
/// Platform implementations must provide this interface for the sensor
/// frontend. A scan triggers one conversion sweep over every channel and
/// busy-waits for the sequencer to finish.
///
/// # Safety Invariants
///
/// - The converter must be initialized before use
/// - `scan` blocks until the sweep completes; a converter that never
///   finishes stalls the control loop (no timeout is applied)
pub trait AdcInterface {
    /// Run one blocking conversion sweep and return all channel readings
    ///
    /// Readings are 12-bit counts (0..=4095).
    fn scan(&mut self) -> ChannelReadings;
}
