//! Clock configuration
//!
//! The firmware runs from the internal 8 MHz HSI with no PLL, the reset
//! default on every STM32F0. Busy-wait delays are calibrated against this
//! value, so it has to match what `embassy_stm32::init` actually sets up.

/// Core clock in Hz
pub const SYSCLK_HZ: u32 = 8_000_000;

/// Peripheral configuration for `embassy_stm32::init`
pub fn config() -> embassy_stm32::Config {
    // Reset defaults: HSI, no PLL, AHB/APB prescalers 1
    embassy_stm32::Config::default()
}
