/// Deadlines for the tick alarm on a fixed grid.
///
/// Each deadline is `origin + k * period`, counted from the previous deadline
/// and not from when the handler ran, so interrupt latency does not add up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickGrid {
    next_us: u64,
    period_us: u64,
}

impl TickGrid {
    pub const fn new(origin_us: u64, period_us: u32) -> Self {
        Self {
            next_us: origin_us,
            period_us: period_us as u64,
        }
    }

    /// Moves to the following grid point and returns it.
    pub fn advance(&mut self) -> u64 {
        self.next_us += self.period_us;
        self.next_us
    }

    /// Last deadline handed out by [`advance`](Self::advance).
    pub fn deadline(&self) -> u64 {
        self.next_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TICK_PERIOD_US;

    #[test]
    fn deadlines_are_multiples_of_the_period() {
        let mut grid = TickGrid::new(5_000, TICK_PERIOD_US);
        assert_eq!(grid.advance(), 6_000);
        assert_eq!(grid.advance(), 7_000);
        assert_eq!(grid.deadline(), 7_000);
    }

    #[test]
    fn handler_latency_does_not_accumulate() {
        let origin = 123_456;
        let mut grid = TickGrid::new(origin, TICK_PERIOD_US);
        let mut rearmed_from_now = origin;

        for n in 1..=600_000u64 {
            // The handler runs 1..=37 us after each deadline.
            let latency = 1 + n % 37;
            rearmed_from_now += latency + TICK_PERIOD_US as u64;

            assert_eq!(grid.advance(), origin + n * TICK_PERIOD_US as u64);
        }

        // Ten minutes of ticks stay exactly ten minutes on the grid, while
        // re-arming relative to the handler falls more than 10 s behind.
        assert_eq!(grid.deadline() - origin, 600_000_000);
        assert!(rearmed_from_now - grid.deadline() > 10_000_000);
    }
}
