//! Status indicator
//!
//! A three-channel LED signals the active mode to the operator. Every
//! update drives all three channels so exactly one color is lit at a
//! time, mirroring a single port-wide write.

use crate::platform::Result;
use crate::platform::traits::GpioInterface;

/// Status LED colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedColor {
    Red,
    Green,
    Blue,
}

/// Exclusive-color status LED over three GPIO channels
pub struct StatusLed<G: GpioInterface> {
    red: G,
    green: G,
    blue: G,
}

impl<G: GpioInterface> StatusLed<G> {
    /// Create an indicator over three initialized output pins
    pub fn new(red: G, green: G, blue: G) -> Self {
        Self { red, green, blue }
    }

    /// Light one color and clear the other two
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three channels rejects the write.
    pub fn show(&mut self, color: LedColor) -> Result<()> {
        match color {
            LedColor::Red => {
                self.red.set_high()?;
                self.green.set_low()?;
                self.blue.set_low()?;
            }
            LedColor::Green => {
                self.red.set_low()?;
                self.green.set_high()?;
                self.blue.set_low()?;
            }
            LedColor::Blue => {
                self.red.set_low()?;
                self.green.set_low()?;
                self.blue.set_high()?;
            }
        }
        Ok(())
    }

    /// Currently lit color, if exactly one channel is high
    pub fn color(&self) -> Option<LedColor> {
        match (self.red.read(), self.green.read(), self.blue.read()) {
            (true, false, false) => Some(LedColor::Red),
            (false, true, false) => Some(LedColor::Green),
            (false, false, true) => Some(LedColor::Blue),
            _ => None,
        }
    }
}
