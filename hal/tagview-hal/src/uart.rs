//! UART serial communication abstractions
//!
//! The reader module only ever talks to us, so only the receive half is
//! modelled.

/// UART receiver
///
/// Blocking, polled receive. There is no timeout: if the peer never sends,
/// `read_byte` never returns.
pub trait UartRx {
    /// Error type for receive operations (line errors reported by the
    /// peripheral)
    type Error;

    /// Wait for the receive-complete flag, clear it and return the byte
    fn read_byte(&mut self) -> Result<u8, Self::Error>;
}

impl<T: UartRx + ?Sized> UartRx for &mut T {
    type Error = T::Error;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        T::read_byte(self)
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl UartConfig {
    /// 8N1 at the given baud rate
    pub const fn new(baudrate: u32) -> Self {
        Self {
            baudrate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl Default for UartConfig {
    /// EM-18 class readers transmit at 9600 baud, 8N1
    fn default() -> Self {
        Self::new(9600)
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
