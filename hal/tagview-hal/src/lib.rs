//! Tagview Hardware Abstraction Layer
//!
//! This crate defines the hardware capabilities the reader firmware needs,
//! as traits that chip-specific HALs implement. The control logic in
//! `tagview-core` and the drivers in `tagview-drivers` only see these traits,
//! so they run unchanged against mocks on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tagview-firmware (board init, loop)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tagview-core / tagview-drivers         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tagview-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ tagview-hal-  │
//!             │   stm32f0     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Control lines
//! - [`bus::ParallelBus`] - 8-bit display data/command bus
//! - [`uart::UartRx`] - Receive side of the reader's serial line
//!
//! Delays use [`embedded_hal::delay::DelayNs`] directly; there is nothing
//! board specific to add on top of it.
//!
//! [`embedded_hal::delay::DelayNs`]: https://docs.rs/embedded-hal/1.0/embedded_hal/delay/trait.DelayNs.html

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use bus::ParallelBus;
pub use gpio::OutputPin;
pub use uart::{UartConfig, UartRx};
