//! Shift register emulated on three GPIO lines
//!
//! Mode 0, MSB first: the data-out line is set up while the clock is low,
//! the data-in line is sampled on each rising edge, and the next bit is
//! presented on the falling edge. A byte is complete after 16 edges
//! (8 full clock pulses); the clock idles low.

use isobar_hal::gpio::{InputPin, OutputPin};
use isobar_hal::shift::{ClockedShifter, EDGES_PER_BYTE};

/// Software shift register on clock, data-out and data-in pins
pub struct GpioShifter<CLK, DO, DI> {
    clock: CLK,
    data_out: DO,
    data_in: DI,
    outgoing: u8,
    incoming: u8,
    edges: u8,
}

impl<CLK, DO, DI> GpioShifter<CLK, DO, DI>
where
    CLK: OutputPin,
    DO: OutputPin,
    DI: InputPin,
{
    /// Create a shifter; the clock is driven low (idle)
    pub fn new(mut clock: CLK, data_out: DO, data_in: DI) -> Self {
        clock.set_low();
        Self {
            clock,
            data_out,
            data_in,
            outgoing: 0,
            incoming: 0,
            // Nothing loaded yet counts as complete
            edges: EDGES_PER_BYTE,
        }
    }

    /// Release the pins
    pub fn release(self) -> (CLK, DO, DI) {
        (self.clock, self.data_out, self.data_in)
    }
}

impl<CLK, DO, DI> ClockedShifter for GpioShifter<CLK, DO, DI>
where
    CLK: OutputPin,
    DO: OutputPin,
    DI: InputPin,
{
    fn load(&mut self, byte: u8) {
        self.outgoing = byte;
        self.incoming = 0;
        self.edges = 0;
        self.clock.set_low();
        self.data_out.set_state(byte & 0x80 != 0);
    }

    fn toggle_clock(&mut self) {
        if self.edges >= EDGES_PER_BYTE {
            return;
        }

        if self.clock.is_set_low() {
            self.clock.set_high();
            self.incoming = (self.incoming << 1) | self.data_in.is_high() as u8;
        } else {
            self.clock.set_low();
            self.outgoing <<= 1;
            self.data_out.set_state(self.outgoing & 0x80 != 0);
        }
        self.edges += 1;
    }

    fn is_complete(&self) -> bool {
        self.edges >= EDGES_PER_BYTE
    }

    fn data(&self) -> u8 {
        self.incoming
    }
}
