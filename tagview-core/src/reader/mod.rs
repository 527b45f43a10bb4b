//! Reader loop
//!
//! After a one-time display setup, the loop repeats forever:
//!
//! 1. Home the cursor, then take exactly [`CARD_ID_LEN`] bytes from the
//!    serial line into the identifier buffer, in arrival order.
//! 2. Write those bytes to the display one at a time, waiting the
//!    per-character delay after each, then the trailing delay.
//!
//! Nothing is validated. A short transmission blocks the receive phase
//! until more bytes arrive; a line error reported by the peripheral drops
//! the partial frame and restarts the cycle. A frame is never shown before
//! all of its bytes are in.

pub mod phase;

pub use phase::{Event, Phase};

use embedded_hal::delay::DelayNs;
use tagview_hal::UartRx;

use crate::card::{CardId, CARD_ID_LEN};
use crate::config::ReaderConfig;
use crate::timing;
use crate::traits::CharacterDisplay;

/// Why a cycle was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReaderError<DE, SE> {
    /// The display rejected a write
    Display(DE),
    /// The serial peripheral reported a line error
    Line(SE),
}

/// The reader main loop
///
/// Owns the display, the serial source, the delay provider and the single
/// identifier buffer.
pub struct Reader<D, S, T> {
    display: D,
    source: S,
    delay: T,
    config: ReaderConfig,
    card: CardId,
    phase: Phase,
}

impl<D, S, T> Reader<D, S, T>
where
    D: CharacterDisplay,
    S: UartRx,
    T: DelayNs,
{
    /// Create a reader; nothing is sent until [`Reader::start`]
    pub fn new(display: D, source: S, delay: T, config: ReaderConfig) -> Self {
        Self {
            display,
            source,
            delay,
            config,
            card: CardId::empty(),
            phase: Phase::Startup,
        }
    }

    /// Current loop phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Identifier buffer contents
    pub fn card(&self) -> &CardId {
        &self.card
    }

    /// Timing in use
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Display driver, for inspection
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Give back the parts
    pub fn release(self) -> (D, S, T) {
        (self.display, self.source, self.delay)
    }

    /// Send the startup command sequence, each followed by the startup delay
    ///
    /// Every command in the sequence resets the state it touches, so running
    /// this again leaves the display as running it once would.
    pub fn start(&mut self) -> Result<(), D::Error> {
        for cmd in self.config.startup {
            self.display.command(cmd)?;
            timing::wait(&mut self.delay, self.config.startup_delay);
        }
        self.phase = self.phase.transition(Event::StartupComplete);
        Ok(())
    }

    /// Run one receive phase and one display phase
    ///
    /// Sends the startup sequence first if [`Reader::start`] has not run.
    /// Returns the identifier that was just shown. On error the cycle is
    /// abandoned and the next call starts from the cursor-home command.
    pub fn run_cycle(&mut self) -> Result<&CardId, ReaderError<D::Error, S::Error>> {
        if self.phase == Phase::Startup {
            self.start().map_err(ReaderError::Display)?;
        }
        self.phase = Phase::IDLE;

        if let Err(e) = self.display.command(self.config.home) {
            return Err(self.abort(ReaderError::Display(e)));
        }

        self.receive_frame()?;
        self.display_frame()?;

        Ok(&self.card)
    }

    /// Startup (if not done yet), then cycles forever
    ///
    /// `on_cycle` sees the outcome of every cycle. A failed startup shows up
    /// as a display error and is retried by the next cycle.
    pub fn run_with<F>(mut self, mut on_cycle: F) -> !
    where
        F: FnMut(Result<&CardId, ReaderError<D::Error, S::Error>>),
    {
        loop {
            let outcome = self.run_cycle();
            on_cycle(outcome);
        }
    }

    /// Startup, then cycles forever without reporting
    pub fn run(self) -> ! {
        self.run_with(|_| {})
    }

    /// Collect a whole frame before touching the buffer, so an aborted
    /// receive leaves the previous identifier intact
    fn receive_frame(&mut self) -> Result<(), ReaderError<D::Error, S::Error>> {
        let mut frame = [0u8; CARD_ID_LEN];
        for slot in frame.iter_mut() {
            match self.source.read_byte() {
                Ok(byte) => {
                    *slot = byte;
                    self.phase = self.phase.transition(Event::ByteReceived);
                }
                Err(e) => return Err(self.abort(ReaderError::Line(e))),
            }
        }
        self.card = CardId::from_bytes(frame);
        Ok(())
    }

    fn display_frame(&mut self) -> Result<(), ReaderError<D::Error, S::Error>> {
        for index in 0..CARD_ID_LEN {
            let byte = self.card.as_bytes()[index];
            if let Err(e) = self.display.send_data(byte) {
                return Err(self.abort(ReaderError::Display(e)));
            }
            timing::wait(&mut self.delay, self.config.char_delay);
            self.phase = self.phase.transition(Event::CharacterShown);
        }

        timing::wait(&mut self.delay, self.config.trailing_delay);
        self.phase = self.phase.transition(Event::DisplayComplete);
        Ok(())
    }

    fn abort<E>(&mut self, error: E) -> E {
        self.phase = self.phase.transition(Event::CycleAborted);
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcd::{LcdModel, HOME_CURSOR};
    use heapless::{Deque, Vec};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Command(u8),
        Data(u8),
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct BusFault;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct LineFault;

    /// Display that records every write and feeds it to an HD44780 model
    struct MockDisplay {
        ops: Vec<Op, 256>,
        lcd: LcdModel,
        fail_data_after: Option<usize>,
    }

    impl MockDisplay {
        fn new() -> Self {
            Self {
                ops: Vec::new(),
                lcd: LcdModel::power_on(),
                fail_data_after: None,
            }
        }

        fn data_count(&self) -> usize {
            self.ops.iter().filter(|op| matches!(op, Op::Data(_))).count()
        }
    }

    impl CharacterDisplay for MockDisplay {
        type Error = BusFault;

        fn send_command(&mut self, byte: u8) -> Result<(), BusFault> {
            self.ops.push(Op::Command(byte)).unwrap();
            self.lcd.apply_byte(byte);
            Ok(())
        }

        fn send_data(&mut self, byte: u8) -> Result<(), BusFault> {
            if self.fail_data_after == Some(self.data_count()) {
                return Err(BusFault);
            }
            self.ops.push(Op::Data(byte)).unwrap();
            self.lcd.write(byte);
            Ok(())
        }
    }

    /// Serial line that plays back a script; running dry means the reader
    /// would block forever, which a test treats as a bug
    struct ScriptedLine {
        script: Deque<Result<u8, LineFault>, 64>,
    }

    impl ScriptedLine {
        fn new() -> Self {
            Self {
                script: Deque::new(),
            }
        }

        fn frame(mut self, bytes: &[u8]) -> Self {
            for &b in bytes {
                self.script.push_back(Ok(b)).unwrap();
            }
            self
        }

        fn fault(mut self) -> Self {
            self.script.push_back(Err(LineFault)).unwrap();
            self
        }
    }

    impl UartRx for ScriptedLine {
        type Error = LineFault;

        fn read_byte(&mut self) -> Result<u8, LineFault> {
            self.script.pop_front().expect("serial script exhausted")
        }
    }

    /// Delay that records each request in time-units
    #[derive(Default)]
    struct RecordingDelay {
        units: Vec<u32, 256>,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.units.push(ns / timing::NANOS_PER_UNIT).unwrap();
        }
    }

    const FRAME_A: [u8; 12] = [
        0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x3A, 0x3B, 0x3C,
    ];
    const FRAME_B: [u8; 12] = *b"0415AB8C92F3";

    fn reader(
        line: ScriptedLine,
    ) -> Reader<MockDisplay, ScriptedLine, RecordingDelay> {
        Reader::new(
            MockDisplay::new(),
            line,
            RecordingDelay::default(),
            ReaderConfig::default(),
        )
    }

    #[test]
    fn test_start_sends_sequence_with_delays() {
        let mut reader = reader(ScriptedLine::new());
        assert_eq!(reader.phase(), Phase::Startup);

        reader.start().unwrap();

        let (display, _, delay) = reader.release();
        assert_eq!(
            display.ops.as_slice(),
            &[
                Op::Command(0x38),
                Op::Command(0x01),
                Op::Command(0x0C),
                Op::Command(0x08),
            ]
        );
        assert_eq!(delay.units.as_slice(), &[50, 50, 50, 50]);
    }

    #[test]
    fn test_start_moves_to_receiving() {
        let mut reader = reader(ScriptedLine::new());
        reader.start().unwrap();
        assert_eq!(reader.phase(), Phase::IDLE);
    }

    #[test]
    fn test_cycle_displays_frame_in_order() {
        let mut reader = reader(ScriptedLine::new().frame(&FRAME_A));
        reader.start().unwrap();

        let card = *reader.run_cycle().unwrap();
        assert_eq!(card.as_bytes(), &FRAME_A);

        let (display, _, delay) = reader.release();
        let cycle_ops = &display.ops[4..];

        // Cursor home first, then exactly twelve data writes in arrival order
        assert_eq!(cycle_ops[0], Op::Command(HOME_CURSOR.to_byte()));
        assert_eq!(cycle_ops.len(), 1 + FRAME_A.len());
        for (op, &byte) in cycle_ops[1..].iter().zip(FRAME_A.iter()) {
            assert_eq!(*op, Op::Data(byte));
        }

        // 4 startup waits, 12 character waits, 1 trailing wait
        assert_eq!(delay.units.len(), 4 + 12 + 1);
        assert!(delay.units[4..].iter().all(|&u| u == 50));
    }

    #[test]
    fn test_cycle_ends_idle() {
        let mut reader = reader(ScriptedLine::new().frame(&FRAME_A));
        reader.start().unwrap();
        reader.run_cycle().unwrap();
        assert_eq!(reader.phase(), Phase::IDLE);
    }

    #[test]
    fn test_two_frames_reset_to_first_position() {
        let mut reader = reader(ScriptedLine::new().frame(&FRAME_A).frame(&FRAME_B));
        reader.start().unwrap();

        reader.run_cycle().unwrap();
        assert_eq!(reader.display().lcd.address(), 12);
        assert_eq!(&reader.display().lcd.row(0)[..12], &FRAME_A);

        reader.run_cycle().unwrap();
        // Second frame overwrote the first from position 0
        assert_eq!(reader.display().lcd.address(), 12);
        assert_eq!(&reader.display().lcd.row(0)[..12], &FRAME_B);
        assert_eq!(reader.card().as_bytes(), &FRAME_B);

        // Home command precedes each batch of twelve
        let ops = &reader.display().ops[4..];
        assert_eq!(ops.len(), 2 * 13);
        assert_eq!(ops[0], Op::Command(0x80));
        assert_eq!(ops[13], Op::Command(0x80));
        assert!(ops[1..13].iter().all(|op| matches!(op, Op::Data(_))));
        assert!(ops[14..].iter().all(|op| matches!(op, Op::Data(_))));
    }

    #[test]
    fn test_repeated_startup_is_idempotent() {
        let mut once = reader(ScriptedLine::new());
        once.start().unwrap();

        let mut twice = reader(ScriptedLine::new());
        twice.start().unwrap();
        twice.start().unwrap();

        assert_eq!(once.display().lcd, twice.display().lcd);
        assert_eq!(once.phase(), twice.phase());
    }

    #[test]
    fn test_line_error_drops_partial_frame() {
        let line = ScriptedLine::new()
            .frame(&FRAME_A[..5])
            .fault()
            .frame(&FRAME_B);
        let mut reader = reader(line);
        reader.start().unwrap();

        assert_eq!(reader.run_cycle(), Err(ReaderError::Line(LineFault)));
        assert_eq!(reader.phase(), Phase::IDLE);
        assert_eq!(reader.display().data_count(), 0);
        assert_eq!(reader.card(), &CardId::empty());

        let card = *reader.run_cycle().unwrap();
        assert_eq!(card.as_bytes(), &FRAME_B);

        // The retry homes the cursor again before its data
        let ops = &reader.display().ops[4..];
        assert_eq!(ops[0], Op::Command(0x80));
        assert_eq!(ops[1], Op::Command(0x80));
        assert_eq!(reader.display().data_count(), 12);
    }

    #[test]
    fn test_line_error_keeps_previous_card() {
        let line = ScriptedLine::new()
            .frame(&FRAME_A)
            .frame(&FRAME_B[..5])
            .fault()
            .frame(&FRAME_B);
        let mut reader = reader(line);
        reader.start().unwrap();
        reader.run_cycle().unwrap();

        assert_eq!(reader.run_cycle(), Err(ReaderError::Line(LineFault)));
        // Buffer and panel both still hold the last complete frame
        assert_eq!(reader.card().as_bytes(), &FRAME_A);
        assert_eq!(&reader.display().lcd.row(0)[..12], &FRAME_A);

        reader.run_cycle().unwrap();
        assert_eq!(reader.card().as_bytes(), &FRAME_B);
        assert_eq!(&reader.display().lcd.row(0)[..12], &FRAME_B);
    }

    #[test]
    fn test_cycle_before_start_sends_startup() {
        let mut reader = reader(ScriptedLine::new().frame(&FRAME_A).frame(&FRAME_B));

        let card = *reader.run_cycle().unwrap();
        assert_eq!(card.as_bytes(), &FRAME_A);
        assert_eq!(
            &reader.display().ops[..5],
            &[
                Op::Command(0x38),
                Op::Command(0x01),
                Op::Command(0x0C),
                Op::Command(0x08),
                Op::Command(0x80),
            ]
        );

        // Startup is not repeated on later cycles
        reader.run_cycle().unwrap();
        let commands = reader
            .display()
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Command(_)))
            .count();
        assert_eq!(commands, 4 + 2);
    }

    #[test]
    fn test_display_error_aborts_cycle() {
        let mut display = MockDisplay::new();
        display.fail_data_after = Some(3);
        let mut reader = Reader::new(
            display,
            ScriptedLine::new().frame(&FRAME_A),
            RecordingDelay::default(),
            ReaderConfig::default(),
        );
        reader.start().unwrap();

        assert_eq!(reader.run_cycle(), Err(ReaderError::Display(BusFault)));
        assert_eq!(reader.phase(), Phase::IDLE);
        assert_eq!(reader.display().data_count(), 3);
        // The whole frame was received before any of it was shown
        assert_eq!(reader.card().as_bytes(), &FRAME_A);
    }

    #[test]
    fn test_shortened_delays_from_config() {
        let config = ReaderConfig::new()
            .with_startup_delay(0)
            .with_char_delays(0, 0);
        let mut reader = Reader::new(
            MockDisplay::new(),
            ScriptedLine::new().frame(&FRAME_A),
            RecordingDelay::default(),
            config,
        );
        reader.start().unwrap();
        reader.run_cycle().unwrap();

        let (_, _, delay) = reader.release();
        assert!(delay.units.is_empty());
    }

    #[test]
    #[should_panic(expected = "serial script exhausted")]
    fn test_run_blocks_on_missing_bytes() {
        // Only part of a frame ever arrives
        let reader = reader(ScriptedLine::new().frame(&FRAME_A[..4]));
        reader.run();
    }
}
