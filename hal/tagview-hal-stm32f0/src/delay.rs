//! Busy-wait delay on the core clock
//!
//! Counts CPU cycles instead of using a timer, the same way a calibrated
//! instruction loop would. Interrupts only ever make it longer.

use embedded_hal::delay::DelayNs;
use tagview_core::timing::cycles_for_nanos;

/// Cycle-counting delay
#[derive(Debug, Clone, Copy)]
pub struct CycleDelay {
    sysclk_hz: u32,
}

impl CycleDelay {
    /// Delay calibrated for a core running at `sysclk_hz`
    pub const fn new(sysclk_hz: u32) -> Self {
        Self { sysclk_hz }
    }
}

impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        let mut cycles = cycles_for_nanos(ns, self.sysclk_hz);
        while cycles > 0 {
            let chunk = cycles.min(u32::MAX as u64) as u32;
            cortex_m::asm::delay(chunk);
            cycles -= chunk as u64;
        }
    }
}
