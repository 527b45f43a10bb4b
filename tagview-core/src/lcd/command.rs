//! HD44780 instruction set
//!
//! Every instruction is a single byte whose highest set bit selects the
//! instruction family; the lower bits are flags or an address.

/// Display controller instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Fill DDRAM with spaces, address 0, entry mode increment
    ClearDisplay,
    /// Address 0 and undo any display shift
    ReturnHome,
    /// Cursor direction after each data write, and whether the display
    /// shifts with it
    EntryModeSet { increment: bool, shift: bool },
    /// Display, cursor and cursor blink on/off
    DisplayControl {
        display: bool,
        cursor: bool,
        blink: bool,
    },
    /// Move the cursor or shift the whole display by one position
    CursorShift { display: bool, right: bool },
    /// Interface width, line count and font
    FunctionSet {
        eight_bit: bool,
        two_line: bool,
        large_font: bool,
    },
    /// Point the address counter into character generator RAM (6 bits)
    SetCgramAddress(u8),
    /// Point the address counter into display data RAM (7 bits)
    SetDdramAddress(u8),
}

/// Startup sequence sent once before the reader loop
///
/// 0x38: 8-bit bus, 2 lines, 5x7 font.
/// 0x01: clear.
/// 0x0C: display on, cursor off.
/// 0x08: meant to home the cursor, but 0x08 is a display-control
/// instruction with every flag clear. Kept as shipped until verified on
/// hardware; homing is done by [`HOME_CURSOR`] at the top of every cycle.
pub const STARTUP_SEQUENCE: [Command; 4] = [
    Command::FunctionSet {
        eight_bit: true,
        two_line: true,
        large_font: false,
    },
    Command::ClearDisplay,
    Command::DisplayControl {
        display: true,
        cursor: false,
        blink: false,
    },
    Command::DisplayControl {
        display: false,
        cursor: false,
        blink: false,
    },
];

/// First position of the first line (0x80)
pub const HOME_CURSOR: Command = Command::SetDdramAddress(0);

const fn flag(set: bool, bit: u8) -> u8 {
    if set {
        1 << bit
    } else {
        0
    }
}

const fn has(byte: u8, bit: u8) -> bool {
    byte & (1 << bit) != 0
}

impl Command {
    /// Encode as the byte placed on the bus with RS low
    pub const fn to_byte(self) -> u8 {
        match self {
            Command::ClearDisplay => 0x01,
            Command::ReturnHome => 0x02,
            Command::EntryModeSet { increment, shift } => {
                0x04 | flag(increment, 1) | flag(shift, 0)
            }
            Command::DisplayControl {
                display,
                cursor,
                blink,
            } => 0x08 | flag(display, 2) | flag(cursor, 1) | flag(blink, 0),
            Command::CursorShift { display, right } => 0x10 | flag(display, 3) | flag(right, 2),
            Command::FunctionSet {
                eight_bit,
                two_line,
                large_font,
            } => 0x20 | flag(eight_bit, 4) | flag(two_line, 3) | flag(large_font, 2),
            Command::SetCgramAddress(addr) => 0x40 | (addr & 0x3F),
            Command::SetDdramAddress(addr) => 0x80 | (addr & 0x7F),
        }
    }

    /// Decode a command byte
    ///
    /// Don't-care bits are ignored. Returns `None` for 0x00, which is not an
    /// instruction.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        let cmd = match byte.leading_zeros() {
            0 => Command::SetDdramAddress(byte & 0x7F),
            1 => Command::SetCgramAddress(byte & 0x3F),
            2 => Command::FunctionSet {
                eight_bit: has(byte, 4),
                two_line: has(byte, 3),
                large_font: has(byte, 2),
            },
            3 => Command::CursorShift {
                display: has(byte, 3),
                right: has(byte, 2),
            },
            4 => Command::DisplayControl {
                display: has(byte, 2),
                cursor: has(byte, 1),
                blink: has(byte, 0),
            },
            5 => Command::EntryModeSet {
                increment: has(byte, 1),
                shift: has(byte, 0),
            },
            6 => Command::ReturnHome,
            7 => Command::ClearDisplay,
            _ => return None,
        };
        Some(cmd)
    }
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> u8 {
        cmd.to_byte()
    }
}
