//! Reader loop phases
//!
//! The loop is a two-phase cycle entered after a one-time startup:
//! receive exactly one frame, then show it. Transitions are pure so the
//! sequencing can be checked without any hardware.

use crate::card::CARD_ID_LEN;

const LAST: u8 = CARD_ID_LEN as u8;

/// Where the reader loop is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Display setup commands not yet sent
    Startup,
    /// Waiting on the serial line; `received` bytes of the frame are in
    Receiving { received: u8 },
    /// Writing the frame out; `shown` characters are on the display
    Displaying { shown: u8 },
}

/// Things that move the loop forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Startup command sequence sent
    StartupComplete,
    /// One byte stored in the identifier buffer
    ByteReceived,
    /// One identifier character written to the display
    CharacterShown,
    /// Trailing delay after the last character elapsed
    DisplayComplete,
    /// A line or bus error dropped the current cycle
    CycleAborted,
}

impl Phase {
    /// Phase at the start of every cycle
    pub const IDLE: Phase = Phase::Receiving { received: 0 };

    /// Process an event and return the next phase
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            (Startup, StartupComplete) => Self::IDLE,

            (Receiving { received }, ByteReceived) if received + 1 < LAST => Receiving {
                received: received + 1,
            },
            // Display only starts once the whole frame is in
            (Receiving { .. }, ByteReceived) => Displaying { shown: 0 },

            (Displaying { shown }, CharacterShown) if shown < LAST => Displaying { shown: shown + 1 },
            (Displaying { shown: LAST }, DisplayComplete) => Self::IDLE,

            (Receiving { .. } | Displaying { .. }, CycleAborted) => Self::IDLE,

            // Default: stay in current phase
            _ => self,
        }
    }
}
