//! Compile-time settings for the stopwatch firmware.

/// Period of the tick interrupt in microseconds.
pub const TICK_PERIOD_US: u32 = 1_000;

/// Raw ticks accumulated before the tenths digit advances.
///
/// Tied to [`TICK_PERIOD_US`]: 100 ticks of 1 ms make one tenth of a second.
/// A different tick cadence only needs this threshold changed.
pub const TICKS_PER_TENTH: u8 = 100;

pub const TENTHS_PER_SECOND: u8 = 10;
pub const SECONDS_PER_MINUTE: u8 = 60;

/// Minutes wrap back to zero at this value (capacity 9:59.9).
pub const MINUTES_WRAP: u8 = 10;

/// Number of chained MAX7219 8x8 matrices (FC16 module).
pub const DISPLAY_DEVICES: usize = 4;

/// Rows per matrix.
pub const DISPLAY_ROWS: usize = 8;

/// Brightness written to every matrix at startup (0x0..=0xF).
pub const DISPLAY_INTENSITY: u8 = 0x0;

/// SPI clock for the display chain in Hz.
pub const DISPLAY_SPI_HZ: u32 = 2_000_000;

/// Crystal frequency of the Pico board.
pub const XTAL_FREQ_HZ: u32 = 12_000_000;
