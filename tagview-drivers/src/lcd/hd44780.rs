//! HD44780 driver, 8-bit parallel interface
//!
//! Write-only: RW is tied to write for the whole session and the busy flag
//! is never read. Every transfer is the same sequence:
//!
//! 1. RS low for an instruction, high for a character
//! 2. RW low (write)
//! 3. byte onto D0-D7
//! 4. EN high, wait the settle time, EN low (the controller latches on the
//!    falling edge)
//!
//! The settle time has to cover the slowest instruction the caller sends;
//! nothing checks that it does.
//!
//! # Usage
//!
//! ```ignore
//! let pins = LcdPins { rs, rw, en };
//! let mut lcd = Hd44780::new(bus, pins, delay, config.enable_settle);
//! lcd.command(Command::ClearDisplay)?;
//! lcd.send_data(b'A')?;
//! ```

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use tagview_core::timing;
use tagview_core::traits::CharacterDisplay;
use tagview_hal::{OutputPin, ParallelBus};

/// The three control lines
pub struct LcdPins<RS, RW, EN> {
    /// Register select: low = instruction, high = character data
    pub rs: RS,
    /// Read/write: held low (write)
    pub rw: RW,
    /// Enable strobe
    pub en: EN,
}

/// HD44780 on an 8-bit bus
pub struct Hd44780<BUS, RS, RW, EN, D> {
    bus: BUS,
    pins: LcdPins<RS, RW, EN>,
    delay: D,
    /// Enable pulse width in time-units
    settle: u32,
}

impl<BUS, RS, RW, EN, D> Hd44780<BUS, RS, RW, EN, D>
where
    BUS: ParallelBus,
    RS: OutputPin,
    RW: OutputPin,
    EN: OutputPin,
    D: DelayNs,
{
    /// Take ownership of the bus and control lines
    ///
    /// All control lines are driven low immediately so the controller sees
    /// no strobe and RW starts in write mode.
    pub fn new(bus: BUS, mut pins: LcdPins<RS, RW, EN>, delay: D, settle: u32) -> Self {
        pins.en.set_low();
        pins.rw.set_low();
        pins.rs.set_low();
        Self {
            bus,
            pins,
            delay,
            settle,
        }
    }

    /// Give back the bus, pins and delay
    pub fn release(self) -> (BUS, LcdPins<RS, RW, EN>, D) {
        (self.bus, self.pins, self.delay)
    }

    /// One strobed transfer
    fn write(&mut self, data_register: bool, byte: u8) {
        self.pins.rs.set_state(data_register);
        self.pins.rw.set_low();
        self.bus.write(byte);

        self.pins.en.set_high();
        timing::wait(&mut self.delay, self.settle);
        self.pins.en.set_low();
    }
}

impl<BUS, RS, RW, EN, D> CharacterDisplay for Hd44780<BUS, RS, RW, EN, D>
where
    BUS: ParallelBus,
    RS: OutputPin,
    RW: OutputPin,
    EN: OutputPin,
    D: DelayNs,
{
    type Error = Infallible;

    fn send_command(&mut self, byte: u8) -> Result<(), Infallible> {
        self.write(false, byte);
        Ok(())
    }

    fn send_data(&mut self, byte: u8) -> Result<(), Infallible> {
        self.write(true, byte);
        Ok(())
    }
}
