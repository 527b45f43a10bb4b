//! Parallel bus abstractions
//!
//! The character display takes commands and data over an 8-bit parallel
//! bus (D0-D7). Latching is done separately by the enable strobe, so the bus
//! itself only has to present a byte.

/// 8-bit parallel output bus
pub trait ParallelBus {
    /// Drive the byte onto the bus lines, D0 = bit 0
    ///
    /// The value stays on the lines until the next write.
    fn write(&mut self, byte: u8);

    /// Last byte written to the bus
    fn value(&self) -> u8;
}

impl<T: ParallelBus + ?Sized> ParallelBus for &mut T {
    fn write(&mut self, byte: u8) {
        T::write(self, byte)
    }

    fn value(&self) -> u8 {
        T::value(self)
    }
}

/// Split a byte into per-line levels, index 0 = D0
///
/// Used by buses built from eight individual GPIO lines.
pub fn line_levels(byte: u8) -> [bool; 8] {
    let mut levels = [false; 8];
    for (bit, level) in levels.iter_mut().enumerate() {
        *level = byte & (1 << bit) != 0;
    }
    levels
}
