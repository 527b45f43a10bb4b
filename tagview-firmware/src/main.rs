//! Tagview - RFID tag display firmware
//!
//! Reads 12-character tag identifiers from an EM-18 reader on a 9600 baud
//! serial line and shows them on a 16x2 HD44780 LCD, forever.
//!
//! Single thread, no interrupts on the data path: the serial receiver polls
//! and every delay is a busy-wait. The executor only hosts this one task.

#![no_std]
#![no_main]

mod board;

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Instant;
use {defmt_rtt as _, panic_probe as _};

use tagview_core::{Reader, ReaderConfig, ReaderError};

/// Timing the firmware ships with
const READER_CONFIG: ReaderConfig = ReaderConfig::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Tagview firmware starting...");

    let board = board::init(&READER_CONFIG);
    info!("Peripherals initialized");

    let mut reader = Reader::new(board.lcd, board.serial, board.delay, READER_CONFIG);

    match reader.start() {
        Ok(()) => info!("LCD startup sequence sent: {:?}", READER_CONFIG.startup),
        Err(e) => match e {},
    }

    info!("Waiting for tags");
    let mut cycle_start = Instant::now();

    reader.run_with(move |outcome| {
        match outcome {
            Ok(card) => {
                info!("Card {}", card);
                debug!("Cycle took {} ms", cycle_start.elapsed().as_millis());
            }
            Err(ReaderError::Line(e)) => {
                warn!("Serial line error, frame dropped: {:?}", e);
            }
            Err(ReaderError::Display(e)) => match e {},
        }
        cycle_start = Instant::now();
    })
}
