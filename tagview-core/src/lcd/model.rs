//! HD44780 state model
//!
//! Tracks what the controller would hold after a sequence of instructions
//! and data writes: DDRAM contents, address counter, entry mode, display
//! flags and function set. Timing and the busy flag are not modelled.

use super::command::Command;

/// Visible columns on the 16x2 module
pub const COLUMNS: usize = 16;
/// Visible rows on the 16x2 module
pub const ROWS: usize = 2;

/// DDRAM bytes per line in two-line mode
const LINE_LEN: usize = 40;
/// Total DDRAM size
const DDRAM_LEN: usize = 80;
/// CGRAM size (8 characters x 8 rows)
const CGRAM_LEN: usize = 64;
/// Start address of the second line in two-line mode
const LINE2_ADDR: u8 = 0x40;

/// Software copy of the controller state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcdModel {
    ddram: [u8; DDRAM_LEN],
    cgram: [u8; CGRAM_LEN],
    /// Address counter
    address: u8,
    /// True after a CGRAM address set, until the next DDRAM address set
    cgram_selected: bool,
    increment: bool,
    entry_shift: bool,
    display_on: bool,
    cursor_on: bool,
    blink_on: bool,
    eight_bit: bool,
    two_line: bool,
    large_font: bool,
    /// Display shift in positions, 0..LINE_LEN
    shift: u8,
}

impl Default for LcdModel {
    fn default() -> Self {
        Self::power_on()
    }
}

impl LcdModel {
    /// State after the controller's internal reset circuit runs
    ///
    /// Display cleared, 8-bit, one line, display off, increment without
    /// shift.
    pub fn power_on() -> Self {
        Self {
            ddram: [b' '; DDRAM_LEN],
            cgram: [0; CGRAM_LEN],
            address: 0,
            cgram_selected: false,
            increment: true,
            entry_shift: false,
            display_on: false,
            cursor_on: false,
            blink_on: false,
            eight_bit: true,
            two_line: false,
            large_font: false,
            shift: 0,
        }
    }

    /// Execute an instruction (byte written with RS low)
    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::ClearDisplay => {
                self.ddram = [b' '; DDRAM_LEN];
                self.address = 0;
                self.cgram_selected = false;
                self.increment = true;
                self.shift = 0;
            }
            Command::ReturnHome => {
                self.address = 0;
                self.cgram_selected = false;
                self.shift = 0;
            }
            Command::EntryModeSet { increment, shift } => {
                self.increment = increment;
                self.entry_shift = shift;
            }
            Command::DisplayControl {
                display,
                cursor,
                blink,
            } => {
                self.display_on = display;
                self.cursor_on = cursor;
                self.blink_on = blink;
            }
            Command::CursorShift { display, right } => {
                if display {
                    self.shift_display(!right);
                } else {
                    self.step_address(right);
                }
            }
            Command::FunctionSet {
                eight_bit,
                two_line,
                large_font,
            } => {
                self.eight_bit = eight_bit;
                self.two_line = two_line;
                self.large_font = large_font;
            }
            Command::SetCgramAddress(addr) => {
                self.address = addr & 0x3F;
                self.cgram_selected = true;
            }
            Command::SetDdramAddress(addr) => {
                self.address = addr & 0x7F;
                self.cgram_selected = false;
            }
        }
    }

    /// Execute a raw instruction byte; 0x00 is ignored
    pub fn apply_byte(&mut self, byte: u8) {
        if let Some(cmd) = Command::from_byte(byte) {
            self.apply(cmd);
        }
    }

    /// Write a character (byte written with RS high) at the address
    /// counter, then advance it per the entry mode
    pub fn write(&mut self, byte: u8) {
        if self.cgram_selected {
            self.cgram[self.address as usize % CGRAM_LEN] = byte;
            self.address = if self.increment {
                (self.address + 1) & 0x3F
            } else {
                self.address.wrapping_sub(1) & 0x3F
            };
            return;
        }

        let index = self.ddram_index(self.address);
        self.ddram[index] = byte;
        self.step_address(self.increment);
        if self.entry_shift {
            // Shifting with the cursor keeps the cursor visually still
            self.shift_display(self.increment);
        }
    }

    /// Current address counter
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Whether the display output is enabled
    pub fn is_display_on(&self) -> bool {
        self.display_on
    }

    /// Whether the underline cursor is shown
    pub fn is_cursor_on(&self) -> bool {
        self.cursor_on
    }

    /// Whether the cursor blinks
    pub fn is_blink_on(&self) -> bool {
        self.blink_on
    }

    /// Whether the controller runs in two-line mode
    pub fn is_two_line(&self) -> bool {
        self.two_line
    }

    /// Whether the controller expects an 8-bit bus
    pub fn is_eight_bit(&self) -> bool {
        self.eight_bit
    }

    /// Whether the 5x10 font is selected
    pub fn is_large_font(&self) -> bool {
        self.large_font
    }

    /// Character generator RAM contents
    pub fn cgram(&self) -> &[u8] {
        &self.cgram
    }

    /// The visible characters of `row` (0 or 1) with the current shift
    ///
    /// Out-of-range rows come back blank.
    pub fn row(&self, row: usize) -> [u8; COLUMNS] {
        let mut out = [b' '; COLUMNS];
        if row >= ROWS || (row == 1 && !self.two_line) {
            return out;
        }
        let line_len = if self.two_line { LINE_LEN } else { DDRAM_LEN };
        let base = row * LINE_LEN;
        for (col, slot) in out.iter_mut().enumerate() {
            let offset = (col + self.shift as usize) % line_len;
            *slot = self.ddram[base + offset];
        }
        out
    }

    /// DDRAM cell for an address
    fn ddram_index(&self, addr: u8) -> usize {
        if self.two_line {
            if addr >= LINE2_ADDR {
                LINE_LEN + (addr - LINE2_ADDR) as usize % LINE_LEN
            } else {
                addr as usize % LINE_LEN
            }
        } else {
            addr as usize % DDRAM_LEN
        }
    }

    /// Move the address counter by one, wrapping the way the controller
    /// does (0x27 -> 0x40 -> 0x67 -> 0x00 in two-line mode)
    fn step_address(&mut self, forward: bool) {
        self.address = if self.two_line {
            match (forward, self.address) {
                (true, 0x27) => LINE2_ADDR,
                (true, 0x67) => 0x00,
                (false, 0x00) => 0x67,
                (false, LINE2_ADDR) => 0x27,
                // Addresses past either line still count within 7 bits
                (true, a) => a.wrapping_add(1) & 0x7F,
                (false, a) => a - 1,
            }
        } else {
            match (forward, self.address) {
                (true, a) if a as usize >= DDRAM_LEN - 1 => 0,
                (false, 0) => (DDRAM_LEN - 1) as u8,
                (true, a) => a + 1,
                (false, a) => a - 1,
            }
        };
    }

    fn shift_display(&mut self, left: bool) {
        let len = LINE_LEN as u8;
        self.shift = if left {
            (self.shift + 1) % len
        } else {
            (self.shift + len - 1) % len
        };
    }
}
