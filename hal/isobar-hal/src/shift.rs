//! Software-clocked shift register abstraction
//!
//! Small microcontrollers often expose a bare shift register instead of a
//! full SPI master: software loads a byte, toggles the clock line edge by
//! edge, and polls an overflow flag that the hardware raises after eight
//! complete clock pulses. The captured byte is then read back from the
//! same register.
//!
//! ```text
//!  clock  ‾‾‾|_|‾|_|‾|_|‾|_|‾|_|‾|_|‾|_|‾|_|‾‾‾
//!  edges     1 2 3 4 ...                  16  -> complete
//! ```

/// Number of clock edges needed to shift one full byte
pub const EDGES_PER_BYTE: u8 = 16;

/// A shift register whose clock is driven by software
pub trait ClockedShifter {
    /// Load the outgoing byte and clear the completion flag
    fn load(&mut self, byte: u8);

    /// Toggle the clock line once (one edge)
    fn toggle_clock(&mut self);

    /// Check the completion (overflow) flag
    fn is_complete(&self) -> bool;

    /// Byte captured from the data-in line during the last shift
    fn data(&self) -> u8;
}
