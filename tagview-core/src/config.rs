//! Reader timing configuration
//!
//! Every value is a compile-time constant on the target; the `with_*`
//! builders exist so host tests can shrink delays.

use crate::lcd::{Command, HOME_CURSOR, STARTUP_SEQUENCE};

/// Timing contract between the reader loop and the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReaderConfig {
    /// Enable pulse width, in time-units
    pub enable_settle: u32,
    /// Wait after each startup command
    pub startup_delay: u32,
    /// Wait after each identifier character
    pub char_delay: u32,
    /// Extra wait after the last character of a frame
    pub trailing_delay: u32,
    /// Commands sent once before the loop starts
    pub startup: [Command; 4],
    /// Command that puts the cursor at the first position
    pub home: Command,
}

impl ReaderConfig {
    /// Delays and commands the firmware ships with
    pub const fn new() -> Self {
        Self {
            enable_settle: 15,
            startup_delay: 50,
            char_delay: 50,
            trailing_delay: 50,
            startup: STARTUP_SEQUENCE,
            home: HOME_CURSOR,
        }
    }

    /// Override the enable pulse width
    pub const fn with_enable_settle(mut self, units: u32) -> Self {
        self.enable_settle = units;
        self
    }

    /// Override the post-command startup delay
    pub const fn with_startup_delay(mut self, units: u32) -> Self {
        self.startup_delay = units;
        self
    }

    /// Override the per-character and trailing delays
    pub const fn with_char_delays(mut self, per_char: u32, trailing: u32) -> Self {
        self.char_delay = per_char;
        self.trailing_delay = trailing;
        self
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_timing() {
        let config = ReaderConfig::default();
        assert_eq!(config.enable_settle, 15);
        assert_eq!(config.startup_delay, 50);
        assert_eq!(config.char_delay, 50);
        assert_eq!(config.trailing_delay, 50);
        assert_eq!(config.home.to_byte(), 0x80);
        assert_eq!(config.startup.map(Command::to_byte), [0x38, 0x01, 0x0C, 0x08]);
    }

    #[test]
    fn test_builders() {
        let config = ReaderConfig::new()
            .with_enable_settle(0)
            .with_startup_delay(1)
            .with_char_delays(2, 3);
        assert_eq!(config.enable_settle, 0);
        assert_eq!(config.startup_delay, 1);
        assert_eq!(config.char_delay, 2);
        assert_eq!(config.trailing_delay, 3);
        // Untouched fields keep their defaults
        assert_eq!(config.startup, STARTUP_SEQUENCE);
    }
}
