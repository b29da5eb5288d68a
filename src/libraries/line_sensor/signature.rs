//! Binary line signature encoding
//!
//! A sweep over the sensor array collapses into one byte: bit *i* set when
//! channel *i* sees the line. Thresholding compares each raw reading
//! against the white reference for that channel plus a fixed margin; the
//! black reference never participates.

use crate::platform::traits::{ChannelReadings, SCAN_CHANNELS};

/// Margin in converter counts added to the white reference
///
/// A channel reads as line while its raw value stays below
/// `white + WHITE_MARGIN`.
pub const WHITE_MARGIN: u16 = 80;

/// One bit per sensor channel, bit *i* set when channel *i* sees the line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineSignature(u8);

impl LineSignature {
    /// Wrap a raw bit pattern
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw bit pattern, channel 0 in the least significant bit
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether the given channel sees the line
    ///
    /// `channel` must be below the channel count.
    pub fn channel_on_line(self, channel: usize) -> bool {
        debug_assert!(channel < SCAN_CHANNELS);
        (self.0 >> channel) & 1 != 0
    }
}

/// Threshold one sweep against the white reference row
///
/// Bit *i* is set when `readings[i] < white[i] + WHITE_MARGIN`. An
/// uncalibrated (all-zero) white row therefore marks every channel below
/// the margin as line.
pub fn encode(readings: &ChannelReadings, white: &ChannelReadings) -> LineSignature {
    let mut bits = 0u8;
    for (channel, (&reading, &reference)) in readings.iter().zip(white.iter()).enumerate() {
        if reading < reference.saturating_add(WHITE_MARGIN) {
            bits |= 1 << channel;
        }
    }
    LineSignature::new(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_bit_rule() {
        let mut white = [500; SCAN_CHANNELS];
        white[3] = 100;

        let mut readings = [1000; SCAN_CHANNELS];
        readings[0] = 579; // just inside the margin
        readings[1] = 580; // exactly at the threshold reads as clear
        readings[3] = 150;

        let signature = encode(&readings, &white);
        assert!(signature.channel_on_line(0));
        assert!(!signature.channel_on_line(1));
        assert!(signature.channel_on_line(3));
        assert_eq!(signature.bits(), 0b0000_1001);
    }

    #[test]
    fn test_encode_ignores_black_reference() {
        // Thresholding consults only the white row; identical readings and
        // white rows give identical signatures no matter what black holds
        let readings = [300; SCAN_CHANNELS];
        let white = [250; SCAN_CHANNELS];

        let signature = encode(&readings, &white);
        assert_eq!(signature.bits(), 0b1111_1111);

        // There is no black parameter to vary; the API admits none
        let again = encode(&readings, &white);
        assert_eq!(signature, again);
    }

    #[test]
    fn test_encode_uncalibrated_white_row() {
        // All-zero white row: threshold is the bare margin
        let white = [0; SCAN_CHANNELS];

        let low = [WHITE_MARGIN - 1; SCAN_CHANNELS];
        assert_eq!(encode(&low, &white).bits(), 0b1111_1111);

        let high = [WHITE_MARGIN; SCAN_CHANNELS];
        assert_eq!(encode(&high, &white).bits(), 0);
    }

    #[test]
    fn test_encode_full_frame() {
        let readings = [100; SCAN_CHANNELS];
        let white = [50; SCAN_CHANNELS];
        assert_eq!(encode(&readings, &white).bits(), 0b1111_1111);
    }

    #[test]
    fn test_encode_saturates_near_full_scale() {
        let white = [u16::MAX - 10; SCAN_CHANNELS];
        let readings = [u16::MAX - 1; SCAN_CHANNELS];

        // Threshold saturates instead of wrapping
        assert_eq!(encode(&readings, &white).bits(), 0b1111_1111);
    }

    #[test]
    fn test_signature_default_is_clear() {
        assert_eq!(LineSignature::default().bits(), 0);
    }
}
