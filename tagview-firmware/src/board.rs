//! Board setup for the Nucleo-F072RB
//!
//! Pin map:
//!
//! | Signal        | Pin      |
//! |---------------|----------|
//! | LCD D0-D7     | PB0-PB7  |
//! | LCD RS        | PA0      |
//! | LCD RW        | PA1      |
//! | LCD EN        | PA4      |
//! | Reader TX     | PA10 (USART1 RX) |
//!
//! The reader's signal line is the USART RX pin; the peripheral configures
//! it as an input when the receiver is created.

use defmt::*;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::usart::UartRx;

use tagview_core::ReaderConfig;
use tagview_drivers::lcd::{Hd44780, LcdPins};
use tagview_hal::UartConfig;
use tagview_hal_stm32f0::clock::{self, SYSCLK_HZ};
use tagview_hal_stm32f0::uart::usart_config;
use tagview_hal_stm32f0::{BlockingSerial, ControlPin, CycleDelay, GpioBus};

/// EM-18 line rate
pub const READER_BAUD: u32 = 9600;

/// The display as wired on this board
pub type Lcd = Hd44780<
    GpioBus<'static>,
    ControlPin<'static>,
    ControlPin<'static>,
    ControlPin<'static>,
    CycleDelay,
>;

/// Everything the reader loop needs
pub struct Board {
    pub lcd: Lcd,
    pub serial: BlockingSerial<'static>,
    pub delay: CycleDelay,
}

/// Configure clock, display lines and serial receiver
///
/// Runs once at power-on. All values are fixed; the only fallible step is
/// the USART accepting the line settings, which can only fail if the
/// constants above are wrong for the clock.
pub fn init(config: &ReaderConfig) -> Board {
    let p = embassy_stm32::init(clock::config());
    debug!("Core clock {} Hz", SYSCLK_HZ);

    // Control lines start low: no strobe, write mode
    let out = Level::Low;
    let pins = LcdPins {
        rs: ControlPin::new(Output::new(p.PA0, out, Speed::Low)),
        rw: ControlPin::new(Output::new(p.PA1, out, Speed::Low)),
        en: ControlPin::new(Output::new(p.PA4, out, Speed::Low)),
    };

    let bus = GpioBus::new([
        Output::new(p.PB0, out, Speed::Low),
        Output::new(p.PB1, out, Speed::Low),
        Output::new(p.PB2, out, Speed::Low),
        Output::new(p.PB3, out, Speed::Low),
        Output::new(p.PB4, out, Speed::Low),
        Output::new(p.PB5, out, Speed::Low),
        Output::new(p.PB6, out, Speed::Low),
        Output::new(p.PB7, out, Speed::Low),
    ]);

    let delay = CycleDelay::new(SYSCLK_HZ);
    let lcd = Hd44780::new(bus, pins, delay, config.enable_settle);
    info!("LCD bus configured");

    let line = UartConfig::new(READER_BAUD);
    let rx = match UartRx::new_blocking(p.USART1, p.PA10, usart_config(&line)) {
        Ok(rx) => rx,
        Err(e) => {
            error!("USART1 rejected {} baud: {:?}", line.baudrate, e);
            panic!("reader serial init failed");
        }
    };
    info!("Reader UART initialized at {} baud", line.baudrate);

    Board {
        lcd,
        serial: BlockingSerial::new(rx),
        delay,
    }
}
