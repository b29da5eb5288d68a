//! Momentary control inputs
//!
//! The operator panel exposes four logical controls: mode select, log,
//! decrease, and increase. All are active-low momentary switches read as
//! levels, not edges; the settle delay after an accepted press is the only
//! repeat suppression. On the shipped board two physical switches serve
//! all four roles (mode select doubles as decrease, log as increase), but
//! the control core only ever sees logical levels.

use crate::platform::traits::GpioInterface;

/// Active-low momentary control panel
pub struct ControlPanel<G: GpioInterface> {
    mode_select: G,
    log: G,
    decrease: G,
    increase: G,
}

impl<G: GpioInterface> ControlPanel<G> {
    /// Create a panel over four initialized input pins
    pub fn new(mode_select: G, log: G, decrease: G, increase: G) -> Self {
        Self {
            mode_select,
            log,
            decrease,
            increase,
        }
    }

    /// Whether the mode-select control is held
    pub fn mode_select_pressed(&self) -> bool {
        !self.mode_select.read()
    }

    /// Whether the log control is held
    pub fn log_pressed(&self) -> bool {
        !self.log.read()
    }

    /// Whether the trim-decrease control is held
    pub fn decrease_pressed(&self) -> bool {
        !self.decrease.read()
    }

    /// Whether the trim-increase control is held
    pub fn increase_pressed(&self) -> bool {
        !self.increase.read()
    }

    /// Mutable access to the mode-select pin (for test stimulus)
    pub fn mode_select_mut(&mut self) -> &mut G {
        &mut self.mode_select
    }

    /// Mutable access to the log pin (for test stimulus)
    pub fn log_mut(&mut self) -> &mut G {
        &mut self.log
    }

    /// Mutable access to the decrease pin (for test stimulus)
    pub fn decrease_mut(&mut self) -> &mut G {
        &mut self.decrease
    }

    /// Mutable access to the increase pin (for test stimulus)
    pub fn increase_mut(&mut self) -> &mut G {
        &mut self.increase
    }
}
