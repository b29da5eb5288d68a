//! Reflectance line sensor processing
//!
//! This module turns raw conversion sweeps from the eight-channel
//! reflectance array into a binary line signature. The operator records a
//! black and a white reference row; thresholding happens against the white
//! row with a fixed margin.
//!
//! ## Example
//!
//! ```
//! use tiva_trail::libraries::line_sensor::{encode, CalibrationStore, CalibrationTarget};
//!
//! let mut calibration = CalibrationStore::new();
//! calibration.record(CalibrationTarget::White, [50; 8]);
//!
//! let signature = encode(&[100; 8], calibration.white());
//! assert_eq!(signature.bits(), 0b1111_1111);
//! ```

pub mod calibration;
pub mod signature;

// Re-export commonly used types
pub use calibration::{CalibrationStore, CalibrationTarget};
pub use signature::{LineSignature, WHITE_MARGIN, encode};

/// Converter reference voltage in millivolts
const REFERENCE_MILLIVOLTS: u32 = 3300;

/// Full-scale converter count (12 bits)
const FULL_SCALE_COUNT: u32 = 4095;

/// Convert a raw converter count to millivolts
///
/// Used for operator-facing dumps of the analog levels; the control path
/// works in raw counts throughout.
pub fn raw_to_millivolts(raw: u16) -> u16 {
    (u32::from(raw) * REFERENCE_MILLIVOLTS / FULL_SCALE_COUNT) as u16
}
