//! Decimal digit decomposition of the readings
//!
//! The display shows three digits per quantity:
//!
//! - temperature as `tens ones . tenths` °C, valid for `0.0 <= t < 100.0`
//! - pressure as the last three decimal digits of the value in pascals
//!
//! Values outside those ranges are rejected with a
//! [`CompensationError`]; the `saturating` constructors clamp instead.
//! Truncation is toward zero, and because negative values are rejected it
//! coincides with flooring for every accepted value.

use crate::compensation::CompensationError;

/// Largest digit value
const MAX_DIGIT: u8 = 9;

/// Temperature digits: `tens ones . tenths`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureDigits {
    pub tens: u8,
    pub ones: u8,
    pub tenths: u8,
}

impl TemperatureDigits {
    /// Largest displayable temperature, 99.9 °C
    pub const MAX: Self = Self {
        tens: MAX_DIGIT,
        ones: MAX_DIGIT,
        tenths: MAX_DIGIT,
    };

    /// Decompose a temperature in °C
    pub fn from_celsius(celsius: f32) -> Result<Self, CompensationError> {
        // `!(x >= 0.0)` also rejects NaN
        if !(celsius >= 0.0) || celsius >= 100.0 {
            return Err(CompensationError::TemperatureOutOfRange {
                tenths: (celsius * 10.0) as i32,
            });
        }

        let whole = celsius as u32;
        let tenths = (celsius * 10.0) as u32 % 10;

        Ok(Self {
            tens: (whole / 10) as u8,
            ones: (whole % 10) as u8,
            tenths: tenths as u8,
        })
    }

    /// Decompose a temperature, clamping to `00.0 ..= 99.9`
    pub fn saturating(celsius: f32) -> Self {
        match Self::from_celsius(celsius) {
            Ok(digits) => digits,
            Err(_) if celsius >= 100.0 => Self::MAX,
            Err(_) => Self::default(),
        }
    }

    /// Recombine into tenths of a degree
    pub const fn to_tenths(&self) -> u16 {
        self.tens as u16 * 100 + self.ones as u16 * 10 + self.tenths as u16
    }
}

/// Pressure digits: the last three decimal digits in pascals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressureDigits {
    pub hundreds: u8,
    pub tens: u8,
    pub ones: u8,
}

impl PressureDigits {
    /// Decompose a pressure in pascals
    pub fn from_pascals(pascals: i32) -> Result<Self, CompensationError> {
        if pascals < 0 {
            return Err(CompensationError::PressureOutOfRange { pascals });
        }

        Ok(Self {
            hundreds: (pascals / 100 % 10) as u8,
            tens: (pascals / 10 % 10) as u8,
            ones: (pascals % 10) as u8,
        })
    }

    /// Decompose a pressure, clamping negative values to `000`
    pub fn saturating(pascals: i32) -> Self {
        Self::from_pascals(pascals).unwrap_or_default()
    }

    /// Recombine the three digits (`pascals mod 1000`)
    pub const fn to_value(&self) -> u16 {
        self.hundreds as u16 * 100 + self.tens as u16 * 10 + self.ones as u16
    }
}

/// Everything the display shows in one scan cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitSet {
    pub temperature: TemperatureDigits,
    pub pressure: PressureDigits,
}

impl DigitSet {
    /// Pack into the low 24 bits, one nibble per digit
    ///
    /// Layout (MSB first): temperature tens, ones, tenths, pressure
    /// hundreds, tens, ones.
    pub const fn pack(&self) -> u32 {
        let nibbles = [
            self.temperature.tens,
            self.temperature.ones,
            self.temperature.tenths,
            self.pressure.hundreds,
            self.pressure.tens,
            self.pressure.ones,
        ];

        let mut word = 0u32;
        let mut i = 0;
        while i < nibbles.len() {
            word = (word << 4) | (nibbles[i] & 0x0F) as u32;
            i += 1;
        }
        word
    }

    /// Inverse of [`pack`](Self::pack); bits above 24 are ignored
    pub const fn unpack(word: u32) -> Self {
        Self {
            temperature: TemperatureDigits {
                tens: nibble(word, 20),
                ones: nibble(word, 16),
                tenths: nibble(word, 12),
            },
            pressure: PressureDigits {
                hundreds: nibble(word, 8),
                tens: nibble(word, 4),
                ones: nibble(word, 0),
            },
        }
    }
}

const fn nibble(word: u32, shift: u32) -> u8 {
    ((word >> shift) & 0x0F) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_temperature_digits() {
        let digits = TemperatureDigits::from_celsius(25.082).unwrap();
        assert_eq!(
            digits,
            TemperatureDigits {
                tens: 2,
                ones: 5,
                tenths: 0
            }
        );

        let digits = TemperatureDigits::from_celsius(9.96).unwrap();
        assert_eq!((digits.tens, digits.ones, digits.tenths), (0, 9, 9));
    }

    #[test]
    fn test_temperature_out_of_range() {
        assert_eq!(
            TemperatureDigits::from_celsius(-3.5),
            Err(CompensationError::TemperatureOutOfRange { tenths: -35 })
        );
        assert!(TemperatureDigits::from_celsius(100.0).is_err());
        assert!(TemperatureDigits::from_celsius(f32::NAN).is_err());
    }

    #[test]
    fn test_temperature_saturating() {
        assert_eq!(TemperatureDigits::saturating(-12.0).to_tenths(), 0);
        assert_eq!(TemperatureDigits::saturating(150.0), TemperatureDigits::MAX);
        assert_eq!(TemperatureDigits::saturating(21.5).to_tenths(), 215);
    }

    #[test]
    fn test_pressure_digits() {
        let digits = PressureDigits::from_pascals(5_107_450).unwrap();
        assert_eq!((digits.hundreds, digits.tens, digits.ones), (4, 5, 0));

        assert_eq!(
            PressureDigits::from_pascals(-50),
            Err(CompensationError::PressureOutOfRange { pascals: -50 })
        );
        assert_eq!(PressureDigits::saturating(-50), PressureDigits::default());
    }

    #[test]
    fn test_pack_layout() {
        let set = DigitSet {
            temperature: TemperatureDigits {
                tens: 1,
                ones: 2,
                tenths: 3,
            },
            pressure: PressureDigits {
                hundreds: 4,
                tens: 5,
                ones: 6,
            },
        };
        assert_eq!(set.pack(), 0x0012_3456);
        assert_eq!(DigitSet::unpack(0xFF12_3456), set);
    }

    proptest! {
        #[test]
        fn prop_temperature_recombines_within_a_tenth(celsius in 0.0f32..100.0) {
            if let Ok(digits) = TemperatureDigits::from_celsius(celsius) {
                let shown = digits.to_tenths() as f32 / 10.0;
                prop_assert!(shown <= celsius + 1e-3);
                prop_assert!(celsius - shown < 0.1 + 1e-3);
            }
        }

        #[test]
        fn prop_pressure_recombines_exactly(pascals in 0i32..i32::MAX) {
            let digits = PressureDigits::from_pascals(pascals).unwrap();
            prop_assert_eq!(digits.to_value() as i32, pascals % 1000);
        }

        #[test]
        fn prop_pack_unpack(t in 0u8..10, o in 0u8..10, d in 0u8..10,
                            h in 0u8..10, pt in 0u8..10, po in 0u8..10) {
            let set = DigitSet {
                temperature: TemperatureDigits { tens: t, ones: o, tenths: d },
                pressure: PressureDigits { hundreds: h, tens: pt, ones: po },
            };
            prop_assert_eq!(DigitSet::unpack(set.pack()), set);
        }
    }
}
