//! Sensor compensation formulas
//!
//! Converts raw 20-bit ADC samples into physical values and display digits.
//!
//! Temperature follows the sensor's integer compensation with the three
//! temperature coefficients:
//!
//! ```text
//! var1 = ((adc_t >> 3) - (T1 << 1)) * T2 >> 11
//! var2 = (((adc_t >> 4) - T1)^2 >> 12) * T3 >> 14
//! t    = (var1 + var2) / 5120.0
//! ```
//!
//! Pressure uses a linear approximation that ignores P1-P3:
//!
//! ```text
//! p = ((adc_p >> 2) - 1638) * 50
//! ```

use isobar_protocol::RawSample;

use crate::calibration::CalibrationCoefficients;
use crate::digits::{DigitSet, PressureDigits, TemperatureDigits};

/// Divisor turning the fine temperature into °C
const FINE_TEMPERATURE_PER_DEGREE: f32 = 5120.0;

/// Offset subtracted from the quarter-scaled pressure sample
const PRESSURE_OFFSET: i32 = 1638;

/// Pascals per count of the quarter-scaled pressure sample
const PASCALS_PER_COUNT: i32 = 50;

/// A computed value that cannot be shown on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CompensationError {
    /// Temperature outside `0.0 ..< 100.0` °C (value in 0.1 °C units)
    TemperatureOutOfRange { tenths: i32 },
    /// Negative pressure
    PressureOutOfRange { pascals: i32 },
}

/// Temperature in °C from a raw sample and the temperature coefficients
///
/// Intermediates are 64-bit: the squared term exceeds 32 bits for samples
/// far from `T1 << 4`.
pub fn celsius(adc_t: i32, t1: i16, t2: i16, t3: i16) -> f32 {
    let adc_t = adc_t as i64;
    let (t1, t2, t3) = (t1 as i64, t2 as i64, t3 as i64);

    let var1 = (((adc_t >> 3) - (t1 << 1)) * t2) >> 11;
    let delta = (adc_t >> 4) - t1;
    let var2 = (((delta * delta) >> 12) * t3) >> 14;

    (var1 + var2) as f32 / FINE_TEMPERATURE_PER_DEGREE
}

/// Pressure in pascals from a raw sample
pub const fn pascals(adc_p: i32) -> i32 {
    ((adc_p >> 2) - PRESSURE_OFFSET) * PASCALS_PER_COUNT
}

/// Digits for one polling cycle plus any range violations
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Digits to publish (clamped when out of range)
    pub digits: DigitSet,
    /// Temperature in °C before decomposition
    pub celsius: f32,
    /// Pressure in pascals before decomposition
    pub pascals: i32,
    /// Set when the temperature had to be clamped
    pub temperature_error: Option<CompensationError>,
    /// Set when the pressure had to be clamped
    pub pressure_error: Option<CompensationError>,
}

/// Compensation engine
///
/// Owns the calibration coefficients for the lifetime of the firmware.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Compensator {
    calibration: CalibrationCoefficients,
}

impl Compensator {
    /// Create an engine from the coefficients read at boot
    pub const fn new(calibration: CalibrationCoefficients) -> Self {
        Self { calibration }
    }

    /// Temperature in °C
    pub fn temperature_celsius(&self, raw: RawSample) -> f32 {
        let (t1, t2, t3) = self.calibration.temperature();
        celsius(raw.signed(), t1, t2, t3)
    }

    /// Temperature digits
    pub fn temperature(&self, raw: RawSample) -> Result<TemperatureDigits, CompensationError> {
        TemperatureDigits::from_celsius(self.temperature_celsius(raw))
    }

    /// Pressure in pascals
    pub fn pressure_pascals(&self, raw: RawSample) -> i32 {
        pascals(raw.signed())
    }

    /// Pressure digits
    pub fn pressure(&self, raw: RawSample) -> Result<PressureDigits, CompensationError> {
        PressureDigits::from_pascals(self.pressure_pascals(raw))
    }

    /// Compute the full digit set for one pair of samples
    ///
    /// Out-of-range values are clamped and reported, never wrapped.
    pub fn reading(&self, temperature: RawSample, pressure: RawSample) -> Reading {
        let celsius = self.temperature_celsius(temperature);
        let pascals = self.pressure_pascals(pressure);

        let (temperature_digits, temperature_error) = match TemperatureDigits::from_celsius(celsius) {
            Ok(digits) => (digits, None),
            Err(e) => (TemperatureDigits::saturating(celsius), Some(e)),
        };
        let (pressure_digits, pressure_error) = match PressureDigits::from_pascals(pascals) {
            Ok(digits) => (digits, None),
            Err(e) => (PressureDigits::saturating(pascals), Some(e)),
        };

        Reading {
            digits: DigitSet {
                temperature: temperature_digits,
                pressure: pressure_digits,
            },
            celsius,
            pascals,
            temperature_error,
            pressure_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Worked example from the BMP280 datasheet
    const T1: i16 = 27504;
    const T2: i16 = 26435;
    const T3: i16 = -1000;
    const ADC_T: i32 = 519_888;
    const ADC_P: i32 = 415_148;

    fn compensator() -> Compensator {
        Compensator::new(CalibrationCoefficients::from_blocks([
            (T1, T2),
            (T3, -29_059),
            (-10685, 3024),
        ]))
    }

    #[test]
    fn test_datasheet_temperature() {
        // var1 = 128793, var2 = -371 -> 128422 / 5120
        let t = celsius(ADC_T, T1, T2, T3);
        assert!((t - 25.082_42).abs() < 1e-4);

        let digits = compensator()
            .temperature(RawSample::from_value(ADC_T as u32))
            .unwrap();
        assert_eq!((digits.tens, digits.ones, digits.tenths), (2, 5, 0));
    }

    #[test]
    fn test_pressure_formula() {
        assert_eq!(pascals(ADC_P), 5_107_450);
        assert_eq!(pascals(4 * 1638), 0);
        assert_eq!(pascals(0), -81_900);
    }

    #[test]
    fn test_pressure_ignores_pressure_coefficients() {
        let a = compensator();
        let b = Compensator::new(CalibrationCoefficients::from_blocks([
            (T1, T2),
            (T3, 0),
            (0, 0),
        ]));
        let raw = RawSample::from_value(ADC_P as u32);
        assert_eq!(a.pressure(raw), b.pressure(raw));
    }

    #[test]
    fn test_reading_clamps_and_reports() {
        let comp = compensator();
        let reading = comp.reading(RawSample::from_value(0), RawSample::from_value(0));

        assert_eq!(reading.digits.temperature, TemperatureDigits::default());
        assert!(matches!(
            reading.temperature_error,
            Some(CompensationError::TemperatureOutOfRange { .. })
        ));
        assert_eq!(
            reading.pressure_error,
            Some(CompensationError::PressureOutOfRange { pascals: -81_900 })
        );
        assert_eq!(reading.digits.pressure, PressureDigits::default());
    }

    #[test]
    fn test_reading_in_range() {
        let reading = compensator().reading(
            RawSample::from_value(ADC_T as u32),
            RawSample::from_value(ADC_P as u32),
        );
        assert_eq!(reading.temperature_error, None);
        assert_eq!(reading.pressure_error, None);
        assert_eq!(reading.digits.temperature.to_tenths(), 250);
        assert_eq!(reading.digits.pressure.to_value(), 450);
    }

    proptest! {
        #[test]
        fn prop_temperature_digits_track_celsius(adc_t in 0i32..(1 << 20)) {
            let t = celsius(adc_t, T1, T2, T3);
            if let Ok(digits) = TemperatureDigits::from_celsius(t) {
                let shown = digits.tens as f32 * 10.0
                    + digits.ones as f32
                    + digits.tenths as f32 / 10.0;
                prop_assert!((t - shown).abs() < 0.1 + 1e-3);
            }
        }

        #[test]
        fn prop_pressure_digits_match_formula(adc_p in (4 * 1638)..(1i32 << 20)) {
            let p = ((adc_p >> 2) - 1638) * 50;
            let digits = PressureDigits::from_pascals(pascals(adc_p)).unwrap();
            prop_assert_eq!(digits.to_value() as i32, p % 1000);
        }
    }
}
