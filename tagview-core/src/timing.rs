//! Delay helper
//!
//! The firmware measures every wait in time-units of one millisecond, the
//! granularity of the busy-wait loop it calibrates against the core clock.
//! Delays are lower bounds: the provider may overshoot, never undershoot.

use embedded_hal::delay::DelayNs;

/// Nanoseconds per time-unit
pub const NANOS_PER_UNIT: u32 = 1_000_000;

/// Busy-wait for at least `units` time-units
///
/// Long waits are split so the nanosecond argument never overflows.
pub fn wait<D: DelayNs + ?Sized>(delay: &mut D, units: u32) {
    const MAX_UNITS: u32 = u32::MAX / NANOS_PER_UNIT;

    let mut remaining = units;
    while remaining > MAX_UNITS {
        delay.delay_ns(MAX_UNITS * NANOS_PER_UNIT);
        remaining -= MAX_UNITS;
    }
    if remaining > 0 {
        delay.delay_ns(remaining * NANOS_PER_UNIT);
    }
}

/// Nominal duration of `units` time-units in nanoseconds
pub const fn units_to_nanos(units: u32) -> u64 {
    units as u64 * NANOS_PER_UNIT as u64
}

/// Core clock cycles covering at least `ns` nanoseconds at `clock_hz`
///
/// Rounded up, so a busy-wait of this many cycles never ends early.
pub const fn cycles_for_nanos(ns: u32, clock_hz: u32) -> u64 {
    let product = ns as u64 * clock_hz as u64;
    (product + 999_999_999) / 1_000_000_000
}
