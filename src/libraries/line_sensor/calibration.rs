//! Reference row storage for the reflectance array
//!
//! The operator records one row per surface during the calibration mode:
//! first the line material (black), then the background (white). Rows are
//! full conversion sweeps, one reading per channel.

use crate::platform::traits::{ChannelReadings, SCAN_CHANNELS};

/// Surface the next calibration sample is taken against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationTarget {
    /// The line material
    Black,
    /// The background surface
    White,
}

impl CalibrationTarget {
    /// The surface sampled after this one
    ///
    /// Calibration alternates strictly: black, white, black, ...
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            CalibrationTarget::Black => CalibrationTarget::White,
            CalibrationTarget::White => CalibrationTarget::Black,
        }
    }
}

/// Recorded reference rows, one per surface
///
/// Both rows start at zero, which makes every channel read as line until a
/// white row is recorded. Each `record` overwrites the addressed row and
/// leaves the other untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationStore {
    black: ChannelReadings,
    white: ChannelReadings,
}

impl CalibrationStore {
    /// Create an empty store (all-zero rows)
    pub const fn new() -> Self {
        Self {
            black: [0; SCAN_CHANNELS],
            white: [0; SCAN_CHANNELS],
        }
    }

    /// Overwrite the row for one surface with a fresh sweep
    pub fn record(&mut self, target: CalibrationTarget, readings: ChannelReadings) {
        match target {
            CalibrationTarget::Black => self.black = readings,
            CalibrationTarget::White => self.white = readings,
        }
    }

    /// The recorded black reference row
    pub fn black(&self) -> &ChannelReadings {
        &self.black
    }

    /// The recorded white reference row
    pub fn white(&self) -> &ChannelReadings {
        &self.white
    }
}

impl Default for CalibrationStore {
    fn default() -> Self {
        Self::new()
    }
}
