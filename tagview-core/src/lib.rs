//! Board-agnostic core logic for the RFID tag display firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Card identifier buffer
//! - HD44780 command set (plus a display state model behind `model`)
//! - Timing configuration and the delay helper
//! - Character display trait
//! - The reader loop (startup, receive phase, display phase)

#![no_std]
#![deny(unsafe_code)]

pub mod card;
pub mod config;
pub mod lcd;
pub mod reader;
pub mod timing;
pub mod traits;

pub use card::{CardId, CARD_ID_LEN};
pub use config::ReaderConfig;
pub use lcd::Command;
pub use reader::{Phase, Reader, ReaderError};
pub use traits::CharacterDisplay;
