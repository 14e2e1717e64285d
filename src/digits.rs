use crate::clock::Snapshot;

/// Number of digits shown by the display.
pub const DIGIT_COUNT: usize = 4;

/// Converts a snapshot into display digits.
///
/// Order is fixed by the display layout:
/// `[tenths, seconds ones, seconds tens, minutes]`.
pub fn format(snapshot: &Snapshot) -> [u8; DIGIT_COUNT] {
    [
        snapshot.tenths,
        snapshot.seconds % 10,
        snapshot.seconds / 10,
        snapshot.minutes,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(tenths: u8, seconds: u8, minutes: u8) -> Snapshot {
        Snapshot {
            tenths,
            seconds,
            minutes,
        }
    }

    #[test]
    fn splits_seconds_into_ones_and_tens() {
        assert_eq!(format(&snap(3, 45, 2)), [3, 5, 4, 2]);
    }

    #[test]
    fn formats_bounds() {
        assert_eq!(format(&Snapshot::ZERO), [0, 0, 0, 0]);
        assert_eq!(format(&snap(9, 59, 9)), [9, 9, 5, 9]);
        assert_eq!(format(&snap(0, 7, 0)), [0, 7, 0, 0]);
        assert_eq!(format(&snap(1, 10, 0)), [1, 0, 1, 0]);
    }
}
