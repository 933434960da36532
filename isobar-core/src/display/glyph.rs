//! Segment patterns
//!
//! Bit layout: `0bPGFEDCBA` (bit 7 = decimal point, bit 0 = segment a).
//!
//! ```text
//!    aaa
//!   f   b
//!    ggg
//!   e   c
//!    ddd  P
//! ```

/// Index of the `P` (pascal) glyph in [`GLYPHS`]
pub const GLYPH_PASCAL: usize = 10;

/// Index of the `C` (celsius) glyph in [`GLYPHS`]
pub const GLYPH_CELSIUS: usize = 11;

/// Digits 0-9 followed by `P` and `C`
pub const GLYPHS: [u8; 12] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
    0b0111_0011, // P
    0b0011_1001, // C
];

/// Decimal point only
pub const DECIMAL_POINT: u8 = 0b1000_0000;

/// All segments off
pub const BLANK: u8 = 0b0000_0000;

/// Pattern for a decimal digit; anything above 9 renders blank
pub const fn digit_glyph(digit: u8) -> u8 {
    if digit <= 9 {
        GLYPHS[digit as usize]
    } else {
        BLANK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Segments lit for each digit on a standard display
    const SEGMENTS: [&str; 10] = [
        "abcdef", "bc", "abdeg", "abcdg", "bcfg", "acdfg", "acdefg", "abc", "abcdefg", "abcdfg",
    ];

    fn encode(segments: &str) -> u8 {
        segments
            .bytes()
            .fold(0, |bits, seg| bits | 1 << (seg - b'a'))
    }

    #[test]
    fn test_digits_match_standard_encoding() {
        for (digit, segments) in SEGMENTS.iter().enumerate() {
            assert_eq!(GLYPHS[digit], encode(segments), "digit {}", digit);
            assert_eq!(digit_glyph(digit as u8), GLYPHS[digit]);
        }
    }

    #[test]
    fn test_letters() {
        assert_eq!(GLYPHS[GLYPH_PASCAL], encode("abefg"));
        assert_eq!(GLYPHS[GLYPH_CELSIUS], encode("adef"));
    }

    #[test]
    fn test_out_of_range_digit_is_blank() {
        assert_eq!(digit_glyph(10), BLANK);
        assert_eq!(digit_glyph(0xFF), BLANK);
    }
}
