//! Character display trait

use crate::lcd::Command;

/// Write-only character display
///
/// Both operations place a byte on the bus and strobe it in; they differ only
/// in the register-select level. There is no busy-flag readback, so each call
/// returns once the implementation's fixed settle time has passed.
pub trait CharacterDisplay {
    /// Error type for bus operations
    type Error;

    /// Write an instruction byte (register-select low)
    fn send_command(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write a character byte (register-select high)
    fn send_data(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write a typed instruction
    fn command(&mut self, cmd: Command) -> Result<(), Self::Error> {
        self.send_command(cmd.to_byte())
    }

    /// Write every byte of `data` in order
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            self.send_data(byte)?;
        }
        Ok(())
    }
}

impl<T: CharacterDisplay + ?Sized> CharacterDisplay for &mut T {
    type Error = T::Error;

    fn send_command(&mut self, byte: u8) -> Result<(), Self::Error> {
        T::send_command(self, byte)
    }

    fn send_data(&mut self, byte: u8) -> Result<(), Self::Error> {
        T::send_data(self, byte)
    }
}
