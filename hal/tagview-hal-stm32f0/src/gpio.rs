//! GPIO lines for STM32F0
//!
//! Thin wrapper so the embassy output driver satisfies the `tagview-hal`
//! trait.

use embassy_stm32::gpio::{Level, Output};

/// Push-pull output driving one display control line
pub struct ControlPin<'d> {
    pin: Output<'d>,
}

impl<'d> ControlPin<'d> {
    /// Wrap a configured output
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl tagview_hal::OutputPin for ControlPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn set_state(&mut self, high: bool) {
        self.pin.set_level(Level::from(high));
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
