//! Hardware abstraction traits
//!
//! The seam between the reader loop and the display driver. The serial side
//! uses [`tagview_hal::UartRx`] directly.

pub mod display;

pub use display::CharacterDisplay;
