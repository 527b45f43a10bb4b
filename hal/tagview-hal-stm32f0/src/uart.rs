//! UART receiver for STM32F0
//!
//! Polled, blocking reception for the reader's serial line. `read_byte`
//! spins on the RXNE flag until a character arrives; there is no timeout.

use embassy_stm32::mode::Blocking;
use embassy_stm32::usart::{
    Config as UsartConfig, DataBits as UsartDataBits, Error as UsartError,
    Parity as UsartParity, StopBits as UsartStopBits, UartRx,
};
use tagview_hal::uart::{DataBits, Parity, StopBits, UartConfig};

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Framing error
    Framing,
    /// Noise error
    Noise,
    /// Overrun error
    Overrun,
    /// Parity error
    Parity,
    /// Other error
    Other,
}

impl From<UsartError> for UartBusError {
    fn from(e: UsartError) -> Self {
        match e {
            UsartError::Framing => UartBusError::Framing,
            UsartError::Noise => UartBusError::Noise,
            UsartError::Overrun => UartBusError::Overrun,
            UsartError::Parity => UartBusError::Parity,
            _ => UartBusError::Other,
        }
    }
}

/// Translate the board-agnostic line settings into the embassy config
pub fn usart_config(config: &UartConfig) -> UsartConfig {
    let mut usart = UsartConfig::default();
    usart.baudrate = config.baudrate;
    usart.data_bits = match config.data_bits {
        DataBits::Seven => UsartDataBits::DataBits7,
        DataBits::Eight => UsartDataBits::DataBits8,
        DataBits::Nine => UsartDataBits::DataBits9,
    };
    usart.parity = match config.parity {
        Parity::None => UsartParity::ParityNone,
        Parity::Even => UsartParity::ParityEven,
        Parity::Odd => UsartParity::ParityOdd,
    };
    usart.stop_bits = match config.stop_bits {
        StopBits::One => UsartStopBits::STOP1,
        StopBits::Two => UsartStopBits::STOP2,
    };
    usart
}

/// Receive half of a USART in blocking mode
pub struct BlockingSerial<'d> {
    rx: UartRx<'d, Blocking>,
}

impl<'d> BlockingSerial<'d> {
    /// Wrap a receiver created with `UartRx::new_blocking`
    pub fn new(rx: UartRx<'d, Blocking>) -> Self {
        Self { rx }
    }
}

impl tagview_hal::UartRx for BlockingSerial<'_> {
    type Error = UartBusError;

    fn read_byte(&mut self) -> Result<u8, UartBusError> {
        let mut buf = [0u8; 1];
        self.rx.blocking_read(&mut buf)?;
        Ok(buf[0])
    }
}
