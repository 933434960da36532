//! Display scan state machine
//!
//! | state | glyph |
//! |---|---|
//! | 0 | temperature tens |
//! | 1 | temperature ones |
//! | 2 | decimal point |
//! | 3 | temperature tenths |
//! | 4 | `C` |
//! | 5 | pressure hundreds |
//! | 6 | pressure tens |
//! | 7 | pressure ones |
//! | 8 | `P` |
//! | 9 | nothing sent; the previous glyph stays lit |

use crate::digits::DigitSet;

use super::glyph::{digit_glyph, BLANK, DECIMAL_POINT, GLYPHS, GLYPH_CELSIUS, GLYPH_PASCAL};

/// Number of states in one scan cycle
pub const SCAN_STEPS: u8 = 10;

/// What the display does on one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanStep {
    TemperatureTens,
    TemperatureOnes,
    DecimalPoint,
    TemperatureTenths,
    Celsius,
    PressureHundreds,
    PressureTens,
    PressureOnes,
    Pascal,
    Idle,
}

impl ScanStep {
    /// Glyph to shift out, or `None` when nothing is sent
    ///
    /// Digit steps render blank until digits have been published.
    pub fn glyph(self, digits: Option<&DigitSet>) -> Option<u8> {
        let digit = |pick: fn(&DigitSet) -> u8| Some(digits.map_or(BLANK, |d| digit_glyph(pick(d))));

        match self {
            ScanStep::TemperatureTens => digit(|d| d.temperature.tens),
            ScanStep::TemperatureOnes => digit(|d| d.temperature.ones),
            ScanStep::DecimalPoint => Some(DECIMAL_POINT),
            ScanStep::TemperatureTenths => digit(|d| d.temperature.tenths),
            ScanStep::Celsius => Some(GLYPHS[GLYPH_CELSIUS]),
            ScanStep::PressureHundreds => digit(|d| d.pressure.hundreds),
            ScanStep::PressureTens => digit(|d| d.pressure.tens),
            ScanStep::PressureOnes => digit(|d| d.pressure.ones),
            ScanStep::Pascal => Some(GLYPHS[GLYPH_PASCAL]),
            ScanStep::Idle => None,
        }
    }
}

/// Position in the scan cycle, always in `0..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanState(u8);

impl ScanState {
    /// Current state number
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Step performed in this state
    pub const fn step(self) -> ScanStep {
        match self.0 {
            0 => ScanStep::TemperatureTens,
            1 => ScanStep::TemperatureOnes,
            2 => ScanStep::DecimalPoint,
            3 => ScanStep::TemperatureTenths,
            4 => ScanStep::Celsius,
            5 => ScanStep::PressureHundreds,
            6 => ScanStep::PressureTens,
            7 => ScanStep::PressureOnes,
            8 => ScanStep::Pascal,
            _ => ScanStep::Idle,
        }
    }

    /// Move to the next state, wrapping 9 -> 0
    pub fn advance(&mut self) {
        self.0 = if self.0 + 1 >= SCAN_STEPS { 0 } else { self.0 + 1 };
    }
}

/// Scan state machine, owned by the display interrupt
#[derive(Debug, Clone, Default)]
pub struct DisplayScanner {
    state: ScanState,
}

impl DisplayScanner {
    /// Start at state 0
    pub const fn new() -> Self {
        Self {
            state: ScanState(0),
        }
    }

    /// Current state
    pub const fn state(&self) -> ScanState {
        self.state
    }

    /// Produce this tick's glyph (if any) and advance by one state
    pub fn tick(&mut self, digits: Option<&DigitSet>) -> Option<u8> {
        let glyph = self.state.step().glyph(digits);
        self.state.advance();
        glyph
    }
}
