use crate::config::{DISPLAY_DEVICES, DISPLAY_ROWS};
use crate::digits::DIGIT_COUNT;
use crate::font::{self, Glyph};

/// Width of the whole matrix strip in pixels.
const STRIP_WIDTH: usize = DISPLAY_DEVICES * 8;

/// Blank column between glyphs.
const GAP: usize = 1;

/// Prepares the 8x8 buffers for the 4 chained MAX7219 devices using FC16 layout.
///
/// `digits` is in formatter order (tenths first); the strip reads `M:SS.T`
/// left to right, centered. Device 0 holds the leftmost columns.
pub fn prepare_buffer(digits: &[u8; DIGIT_COUNT]) -> [[u8; DISPLAY_ROWS]; DISPLAY_DEVICES] {
    let glyphs = [
        font::digit(digits[3]),
        font::COLON,
        font::digit(digits[2]),
        font::digit(digits[1]),
        font::POINT,
        font::digit(digits[0]),
    ];

    let width = glyphs.iter().map(|g| g.width).sum::<usize>() + GAP * (glyphs.len() - 1);
    let mut cursor = (STRIP_WIDTH - width) / 2;
    let mut fb_rows = [0u32; DISPLAY_ROWS];

    for glyph in &glyphs {
        draw_glyph(&mut fb_rows, glyph, cursor);
        cursor += glyph.width + GAP;
    }

    let mut device_buffers = [[0u8; DISPLAY_ROWS]; DISPLAY_DEVICES];
    for (dev_idx, buffer) in device_buffers.iter_mut().enumerate() {
        let shift = 24 - (dev_idx * 8);
        for (r, row) in buffer.iter_mut().enumerate() {
            *row = ((fb_rows[r] >> shift) & 0xFF) as u8;
        }
    }

    device_buffers
}

fn draw_glyph(fb_rows: &mut [u32; DISPLAY_ROWS], glyph: &Glyph, x: usize) {
    for (r, fb_row) in fb_rows.iter_mut().enumerate() {
        for c in 0..glyph.width {
            if glyph.is_set(r, c) && x + c < STRIP_WIDTH {
                *fb_row |= 1 << (STRIP_WIDTH - 1 - (x + c));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Buffers = [[u8; DISPLAY_ROWS]; DISPLAY_DEVICES];

    fn pixel(buffers: &Buffers, x: usize, y: usize) -> bool {
        buffers[x / 8][y] & (0x80 >> (x % 8)) != 0
    }

    fn lit_columns(buffers: &Buffers) -> (usize, usize) {
        let lit: Vec<usize> = (0..STRIP_WIDTH)
            .filter(|&x| (0..DISPLAY_ROWS).any(|y| pixel(buffers, x, y)))
            .collect();
        (lit[0], lit[lit.len() - 1])
    }

    fn assert_glyph_at(buffers: &Buffers, glyph: &Glyph, x: usize) {
        for y in 0..DISPLAY_ROWS {
            for c in 0..glyph.width {
                assert_eq!(
                    pixel(buffers, x + c, y),
                    glyph.is_set(y, c),
                    "pixel ({}, {})",
                    x + c,
                    y
                );
            }
        }
    }

    #[test]
    fn layout_is_centered() {
        let buffers = prepare_buffer(&[8, 8, 8, 8]);
        assert_eq!(lit_columns(&buffers), (6, 24));
    }

    #[test]
    fn places_glyphs_in_reading_order() {
        // 2:45.3
        let buffers = prepare_buffer(&[3, 5, 4, 2]);

        assert_glyph_at(&buffers, &font::DIGITS[2], 6);
        assert_glyph_at(&buffers, &font::COLON, 10);
        assert_glyph_at(&buffers, &font::DIGITS[4], 12);
        assert_glyph_at(&buffers, &font::DIGITS[5], 16);
        assert_glyph_at(&buffers, &font::POINT, 20);
        assert_glyph_at(&buffers, &font::DIGITS[3], 22);
    }

    #[test]
    fn glyph_crossing_device_boundary() {
        let buffers = prepare_buffer(&[0, 0, 0, 0]);
        // Top row of the minutes zero spans columns 6..=8.
        assert_eq!(buffers[0][1], 0b0000_0011);
        assert_eq!(buffers[1][1] & 0x80, 0x80);
        // Device 2 holds the ones zero (16..=18) and two columns of the tenths
        // zero (22..=24); its last column lands on device 3.
        assert_eq!(buffers[2][1], 0b1110_0011);
        assert_eq!(buffers[3][1], 0x80);
        assert_eq!(buffers[3][0], 0);
    }

    #[test]
    fn separators_are_always_drawn() {
        let buffers = prepare_buffer(&[0, 0, 0, 0]);
        assert!(pixel(&buffers, 10, 2));
        assert!(pixel(&buffers, 10, 4));
        assert!(!pixel(&buffers, 10, 3));
        assert!(pixel(&buffers, 20, 5));
    }

    #[test]
    fn out_of_range_digit_is_blank() {
        let buffers = prepare_buffer(&[0, 0, 0, 12]);
        for x in 6..9 {
            for y in 0..DISPLAY_ROWS {
                assert!(!pixel(&buffers, x, y));
            }
        }
        assert_glyph_at(&buffers, &font::DIGITS[0], 22);
    }
}
