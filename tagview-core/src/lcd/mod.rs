//! HD44780 character display support
//!
//! The command set as named values. With the `model` feature (always on for
//! this crate's tests) there is also a software model of the controller's
//! state, for checking command sequences without hardware.

pub mod command;
#[cfg(any(test, feature = "model"))]
pub mod model;

pub use command::{Command, HOME_CURSOR, STARTUP_SEQUENCE};
#[cfg(any(test, feature = "model"))]
pub use model::{LcdModel, COLUMNS, ROWS};
