use crate::command::Command;
use crate::config::{MINUTES_WRAP, SECONDS_PER_MINUTE, TENTHS_PER_SECOND, TICKS_PER_TENTH};

/// Immutable copy of the visible time fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Snapshot {
    pub tenths: u8,
    pub seconds: u8,
    pub minutes: u8,
}

impl Snapshot {
    pub const ZERO: Self = Self {
        tenths: 0,
        seconds: 0,
        minutes: 0,
    };

    /// Elapsed time in tenths of a second.
    pub fn total_tenths(&self) -> u32 {
        let seconds = self.minutes as u32 * SECONDS_PER_MINUTE as u32 + self.seconds as u32;
        seconds * TENTHS_PER_SECOND as u32 + self.tenths as u32
    }
}

/// Shared state for the stopwatch.
///
/// Written by the tick handler and the control inputs, read by the display
/// loop through [`StopwatchClock::snapshot`].
#[derive(Debug, Default)]
pub struct StopwatchClock {
    ticks: u8,
    tenths: u8,
    seconds: u8,
    minutes: u8,
    running: bool,
    reset_requested: bool,
}

impl StopwatchClock {
    pub const fn new() -> Self {
        Self {
            ticks: 0,
            tenths: 0,
            seconds: 0,
            minutes: 0,
            running: false,
            reset_requested: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halts counting. Accumulated time is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Flags a reset. Fields are cleared by the next [`tick`](Self::tick).
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::Reset => self.request_reset(),
        }
    }

    /// Advances by one raw tick.
    ///
    /// A pending reset wins over counting: it zeroes every field, stops the
    /// clock and returns without advancing. Otherwise, while running, the
    /// carry chain runs ticks -> tenths -> seconds -> minutes, and minutes
    /// wrap to zero past 9.
    pub fn tick(&mut self) {
        if self.reset_requested {
            *self = Self::new();
            return;
        }
        if !self.running {
            return;
        }

        self.ticks += 1;
        if self.ticks < TICKS_PER_TENTH {
            return;
        }
        self.ticks = 0;

        self.tenths += 1;
        if self.tenths < TENTHS_PER_SECOND {
            return;
        }
        self.tenths = 0;

        self.seconds += 1;
        if self.seconds < SECONDS_PER_MINUTE {
            return;
        }
        self.seconds = 0;

        self.minutes = (self.minutes + 1) % MINUTES_WRAP;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tenths: self.tenths,
            seconds: self.seconds,
            minutes: self.minutes,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_reset_pending(&self) -> bool {
        self.reset_requested
    }

    /// Raw ticks counted towards the next tenth.
    pub fn pending_ticks(&self) -> u8 {
        self.ticks
    }
}
