//! 3x5 pixel glyphs for the LED matrix.
//!
//! Each row is a bit mask, the most significant of `width` bits being the
//! leftmost column. Glyphs sit on rows 1..=5 of the 8-row matrix.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub width: usize,
    pub rows: [u8; 8],
}

impl Glyph {
    const fn digit(rows: [u8; 5]) -> Self {
        Self {
            width: 3,
            rows: [0, rows[0], rows[1], rows[2], rows[3], rows[4], 0, 0],
        }
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        col < self.width && self.rows[row] & (1 << (self.width - 1 - col)) != 0
    }
}

pub const DIGITS: [Glyph; 10] = [
    Glyph::digit([0b111, 0b101, 0b101, 0b101, 0b111]),
    Glyph::digit([0b010, 0b110, 0b010, 0b010, 0b111]),
    Glyph::digit([0b111, 0b001, 0b111, 0b100, 0b111]),
    Glyph::digit([0b111, 0b001, 0b111, 0b001, 0b111]),
    Glyph::digit([0b101, 0b101, 0b111, 0b001, 0b001]),
    Glyph::digit([0b111, 0b100, 0b111, 0b001, 0b111]),
    Glyph::digit([0b111, 0b100, 0b111, 0b101, 0b111]),
    Glyph::digit([0b111, 0b001, 0b001, 0b001, 0b001]),
    Glyph::digit([0b111, 0b101, 0b111, 0b101, 0b111]),
    Glyph::digit([0b111, 0b101, 0b111, 0b001, 0b111]),
];

pub const BLANK: Glyph = Glyph::digit([0; 5]);

pub const COLON: Glyph = Glyph {
    width: 1,
    rows: [0, 0, 1, 0, 1, 0, 0, 0],
};

pub const POINT: Glyph = Glyph {
    width: 1,
    rows: [0, 0, 0, 0, 0, 1, 0, 0],
};

/// Glyph for a decimal digit, blank when out of range.
pub fn digit(value: u8) -> Glyph {
    DIGITS.get(value as usize).copied().unwrap_or(BLANK)
}
