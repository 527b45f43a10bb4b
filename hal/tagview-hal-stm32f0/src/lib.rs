//! STM32F0-specific HAL for the Tagview firmware
//!
//! Implements the `tagview-hal` traits on top of the blocking
//! `embassy-stm32` drivers. Nothing here uses interrupts: the serial
//! receiver polls its status flag and delays spin on the core clock.
//!
//! Supported: STM32F072RB (Nucleo-F072RB).
//!
//! # Features
//!
//! - `stm32f072rb` - Chip selection
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod bus;
pub mod clock;
pub mod delay;
pub mod gpio;
pub mod uart;

pub use bus::GpioBus;
pub use delay::CycleDelay;
pub use gpio::ControlPin;
pub use uart::{BlockingSerial, UartBusError};
