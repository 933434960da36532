//! 7-segment digit behind a latching shift register (74HC595 style)
//!
//! The latch line is pulled low while the glyph is shifted in and raised
//! afterwards; the rising edge copies the shift register to the outputs, so
//! the digit only ever shows complete patterns.

use isobar_core::traits::{ByteTransport, SegmentDisplay, TransportError};
use isobar_hal::gpio::OutputPin;

/// Display driver owning its transport handle and latch line
pub struct LatchedSegment<T, L> {
    transport: T,
    latch: L,
}

impl<T, L> LatchedSegment<T, L>
where
    T: ByteTransport,
    L: OutputPin,
{
    /// Create a driver; the latch idles high
    pub fn new(transport: T, mut latch: L) -> Self {
        latch.set_high();
        Self { transport, latch }
    }

    /// Release the transport and latch
    pub fn release(self) -> (T, L) {
        (self.transport, self.latch)
    }
}

impl<T, L> SegmentDisplay for LatchedSegment<T, L>
where
    T: ByteTransport,
    L: OutputPin,
{
    fn show_segment(&mut self, glyph: u8) -> Result<(), TransportError> {
        self.latch.set_low();
        let result = self.transport.transfer_byte(glyph).map(|_| ());
        self.latch.set_high();
        result
    }
}
