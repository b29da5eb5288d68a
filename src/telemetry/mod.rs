//! Operator console output
//!
//! The control loop reports through this value-level interface; the
//! UART-backed implementation renders the exact text shapes the operator
//! tooling expects. Prompts deliberately end without a newline so the
//! recorded readings complete the same console line.

use core::fmt::Write as _;

use heapless::String;

use crate::follower::Mode;
use crate::libraries::encoder::Axle;
use crate::libraries::line_sensor::{CalibrationTarget, LineSignature};
use crate::platform::traits::{ChannelReadings, SCAN_CHANNELS, UartInterface};
use crate::platform::{PlatformError, Result, error::UartError};

/// Value-level console interface
///
/// One method per report the control loop makes. Implementations own the
/// rendering; callers never format text.
pub trait Console {
    /// Announce a mode entry
    fn mode_banner(&mut self, mode: Mode) -> Result<()>;

    /// Prompt for the next calibration surface
    ///
    /// The prompt leaves the line open; the matching row closes it.
    fn calibration_prompt(&mut self, target: CalibrationTarget) -> Result<()>;

    /// Report the readings just recorded for the prompted surface
    fn calibration_row(&mut self, readings: &ChannelReadings) -> Result<()>;

    /// Report one thresholded sweep as a bit row
    fn line_signature(&mut self, signature: LineSignature) -> Result<()>;

    /// Report one axle's velocity sample and absolute position
    fn axle_report(&mut self, axle: Axle, velocity: i32, position: u32) -> Result<()>;
}

/// Console rendering over a UART byte sink
///
/// Text shapes match the shipped operator tooling: zero-padded calibration
/// rows, `ADC_BIN:` bit rows with channel 0 leftmost, and `Motor N:`
/// reports with their fixed column widths.
pub struct UartConsole<U: UartInterface> {
    uart: U,
}

impl<U: UartInterface> UartConsole<U> {
    /// Create a console over an initialized UART
    pub fn new(uart: U) -> Self {
        Self { uart }
    }

    /// Immutable access to the underlying UART (for inspection)
    pub fn uart(&self) -> &U {
        &self.uart
    }

    fn write_all(&mut self, mut data: &[u8]) -> Result<()> {
        while !data.is_empty() {
            let written = self.uart.write(data)?;
            if written == 0 {
                return Err(PlatformError::Uart(UartError::WriteFailed));
            }
            data = &data[written..];
        }
        Ok(())
    }
}

impl<U: UartInterface> Console for UartConsole<U> {
    fn mode_banner(&mut self, mode: Mode) -> Result<()> {
        // Later banners open with CRLF to close the pending prompt line
        let banner = match mode {
            Mode::Calibrate => "CALIB_SENSOR\r\n",
            Mode::Diagnostic => "\r\nTEST_HW\r\n",
            Mode::LineFollow => "\r\nLINE_FOLLOW\r\n",
        };
        self.write_all(banner.as_bytes())
    }

    fn calibration_prompt(&mut self, target: CalibrationTarget) -> Result<()> {
        let prompt = match target {
            CalibrationTarget::Black => "CALIB_BLACK: ",
            CalibrationTarget::White => "CALIB_WHITE: ",
        };
        self.write_all(prompt.as_bytes())
    }

    fn calibration_row(&mut self, readings: &ChannelReadings) -> Result<()> {
        let mut line: String<64> = String::new();
        for &value in readings.iter() {
            let _ = write!(line, "{:04} ", value);
        }
        let _ = line.push_str("\r\n");
        self.write_all(line.as_bytes())
    }

    fn line_signature(&mut self, signature: LineSignature) -> Result<()> {
        let mut line: String<24> = String::new();
        let _ = line.push_str("ADC_BIN: ");
        for channel in 0..SCAN_CHANNELS {
            let _ = line.push(if signature.channel_on_line(channel) {
                '1'
            } else {
                '0'
            });
        }
        let _ = line.push_str("\r\n");
        self.write_all(line.as_bytes())
    }

    fn axle_report(&mut self, axle: Axle, velocity: i32, position: u32) -> Result<()> {
        let mut line: String<48> = String::new();
        let _ = write!(line, "Motor {}: {:5}, {:6} \n", axle.number(), velocity, position);
        self.write_all(line.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockUart;
    use std::string::String as StdString;
    use std::vec::Vec;

    fn console() -> UartConsole<MockUart> {
        UartConsole::new(MockUart::new(Default::default()))
    }

    fn text(buffer: Vec<u8>) -> StdString {
        StdString::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_mode_banners() {
        let mut console = console();
        console.mode_banner(Mode::Calibrate).unwrap();
        console.mode_banner(Mode::Diagnostic).unwrap();
        console.mode_banner(Mode::LineFollow).unwrap();

        assert_eq!(
            text(console.uart().tx_buffer()),
            "CALIB_SENSOR\r\n\r\nTEST_HW\r\n\r\nLINE_FOLLOW\r\n"
        );
    }

    #[test]
    fn test_calibration_prompt_leaves_line_open() {
        let mut console = console();
        console
            .calibration_prompt(CalibrationTarget::Black)
            .unwrap();

        assert_eq!(text(console.uart().tx_buffer()), "CALIB_BLACK: ");
    }

    #[test]
    fn test_calibration_row_zero_padded() {
        let mut console = console();
        console
            .calibration_row(&[7, 42, 900, 1023, 0, 4095, 333, 58])
            .unwrap();

        assert_eq!(
            text(console.uart().tx_buffer()),
            "0007 0042 0900 1023 0000 4095 0333 0058 \r\n"
        );
    }

    #[test]
    fn test_prompt_and_row_share_a_line() {
        let mut console = console();
        console
            .calibration_prompt(CalibrationTarget::White)
            .unwrap();
        console.calibration_row(&[100; SCAN_CHANNELS]).unwrap();

        assert_eq!(
            text(console.uart().tx_buffer()),
            "CALIB_WHITE: 0100 0100 0100 0100 0100 0100 0100 0100 \r\n"
        );
    }

    #[test]
    fn test_line_signature_channel_zero_leftmost() {
        let mut console = console();
        console
            .line_signature(LineSignature::new(0b0000_1001))
            .unwrap();

        assert_eq!(text(console.uart().tx_buffer()), "ADC_BIN: 10010000\r\n");
    }

    #[test]
    fn test_axle_report_column_widths() {
        let mut console = console();
        console.axle_report(Axle::Left, 250, 14500).unwrap();
        console.axle_report(Axle::Right, -40, 250).unwrap();

        assert_eq!(
            text(console.uart().tx_buffer()),
            "Motor 1:   250,  14500 \nMotor 2:   -40,    250 \n"
        );
    }
}
