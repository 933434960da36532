//! Seven-segment display trait

use super::transport::TransportError;

/// A single 7-segment digit fed through a latching shift register
///
/// Bit 0 is segment `a`, bit 6 segment `g`, bit 7 the decimal point.
pub trait SegmentDisplay {
    /// Replace the pattern currently lit with `glyph`
    fn show_segment(&mut self, glyph: u8) -> Result<(), TransportError>;
}
