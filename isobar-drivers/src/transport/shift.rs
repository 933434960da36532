//! Byte transport over a software-clocked shift register
//!
//! Loads the outgoing byte, then keeps toggling the clock while polling the
//! completion flag. The poll is bounded: a shifter that never completes
//! (stuck clock, missing hardware) yields [`TransportError::Timeout`]
//! instead of hanging the caller.

use isobar_core::traits::{ByteTransport, TransportError};
use isobar_hal::shift::{ClockedShifter, EDGES_PER_BYTE};

/// Default bound on clock toggles per byte (four times the nominal 16)
pub const DEFAULT_MAX_TOGGLES: u16 = 4 * EDGES_PER_BYTE as u16;

/// [`ByteTransport`] built on a [`ClockedShifter`]
pub struct ShiftTransport<S> {
    shifter: S,
    max_toggles: u16,
}

impl<S: ClockedShifter> ShiftTransport<S> {
    /// Create a transport with the default toggle bound
    pub fn new(shifter: S) -> Self {
        Self::with_max_toggles(shifter, DEFAULT_MAX_TOGGLES)
    }

    /// Create a transport that gives up after `max_toggles` clock edges
    pub fn with_max_toggles(shifter: S, max_toggles: u16) -> Self {
        Self {
            shifter,
            max_toggles,
        }
    }

    /// Release the underlying shifter
    pub fn release(self) -> S {
        self.shifter
    }
}

impl<S: ClockedShifter> ByteTransport for ShiftTransport<S> {
    fn transfer_byte(&mut self, out: u8) -> Result<u8, TransportError> {
        self.shifter.load(out);

        let mut toggles = 0u16;
        while !self.shifter.is_complete() {
            if toggles >= self.max_toggles {
                return Err(TransportError::Timeout);
            }
            self.shifter.toggle_clock();
            toggles += 1;
        }

        Ok(self.shifter.data())
    }
}
