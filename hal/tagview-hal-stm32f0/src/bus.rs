//! 8-bit display bus from individual GPIO outputs

use embassy_stm32::gpio::{Level, Output};
use tagview_hal::bus::line_levels;

/// D0-D7 as eight push-pull outputs
pub struct GpioBus<'d> {
    lines: [Output<'d>; 8],
    value: u8,
}

impl<'d> GpioBus<'d> {
    /// Take the eight outputs, index 0 = D0, and drive 0x00
    pub fn new(lines: [Output<'d>; 8]) -> Self {
        let mut bus = Self { lines, value: 0xFF };
        tagview_hal::ParallelBus::write(&mut bus, 0x00);
        bus
    }
}

impl tagview_hal::ParallelBus for GpioBus<'_> {
    fn write(&mut self, byte: u8) {
        for (line, high) in self.lines.iter_mut().zip(line_levels(byte)) {
            line.set_level(Level::from(high));
        }
        self.value = byte;
    }

    fn value(&self) -> u8 {
        self.value
    }
}
