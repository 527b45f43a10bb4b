//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in `tagview-core`, built
//! on the `tagview-hal` capability traits:
//!
//! - HD44780 character LCD on an 8-bit parallel bus

#![no_std]
#![deny(unsafe_code)]

pub mod lcd;

pub use lcd::Hd44780;
