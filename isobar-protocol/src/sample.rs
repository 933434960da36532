//! Reply decoding: signed words and 20-bit samples

/// Width of a raw ADC sample in bits
pub const SAMPLE_BITS: u32 = 20;

/// Combine a little-endian byte pair into a signed 16-bit word
///
/// `(high << 8) | low`, reinterpreted as two's complement.
pub const fn combine_word(low: u8, high: u8) -> i16 {
    i16::from_le_bytes([low, high])
}

/// A raw 20-bit ADC sample
///
/// Reconstructed from three consecutive reply bytes as
/// `(b0 << 12) | (b1 << 4) | (b2 >> 4)`; the low nibble of `b2` is unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample(u32);

impl RawSample {
    /// Largest representable sample
    pub const MAX: u32 = (1 << SAMPLE_BITS) - 1;

    /// Reconstruct a sample from the three reply bytes
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        let [b0, b1, b2] = bytes;
        Self(((b0 as u32) << 12) | ((b1 as u32) << 4) | ((b2 as u32) >> 4))
    }

    /// Build a sample from a value, keeping the low 20 bits
    pub const fn from_value(value: u32) -> Self {
        Self(value & Self::MAX)
    }

    /// Sample value, always below 2^20
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Sample value as a signed integer for the compensation formulas
    pub const fn signed(self) -> i32 {
        self.0 as i32
    }
}
