//! Display scan driver
//!
//! Called once per scan interrupt. Reads the latest published digits,
//! asks the state machine for this tick's glyph and shifts it out.

use isobar_core::display::{DisplayScanner, ScanState};
use isobar_core::exchange::DigitExchange;
use isobar_core::traits::{SegmentDisplay, TransportError};

/// Scan state machine bound to a display
pub struct SegmentScanner<D> {
    scanner: DisplayScanner,
    display: D,
}

impl<D: SegmentDisplay> SegmentScanner<D> {
    /// Start scanning at state 0
    pub fn new(display: D) -> Self {
        Self {
            scanner: DisplayScanner::new(),
            display,
        }
    }

    /// State the next tick will render
    pub fn state(&self) -> ScanState {
        self.scanner.state()
    }

    /// Handle one scan interrupt
    ///
    /// The state advances even when the transfer fails, so a bad byte
    /// costs one glyph and never stalls the cycle.
    pub fn on_tick(&mut self, exchange: &DigitExchange) -> Result<(), TransportError> {
        let digits = exchange.snapshot();
        match self.scanner.tick(digits.as_ref()) {
            Some(glyph) => self.display.show_segment(glyph),
            None => Ok(()),
        }
    }
}
