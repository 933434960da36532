//! Scan timer configuration
//!
//! The display is advanced by a periodic compare-match interrupt. The only
//! externally supplied parameter is the scan frequency; the compare value
//! is derived from the timer clock:
//!
//! ```text
//! compare = clock_hz / prescaler / scan_hz - 1
//! ```
//!
//! It must fit the compare register, and the divided count must be at
//! least one tick.

/// Errors in the scan timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Scan frequency of zero
    ZeroFrequency,
    /// Scan frequency faster than one timer tick
    FrequencyTooHigh,
    /// Compare value does not fit the compare register
    CompareOverflow,
    /// Prescaler of zero
    ZeroPrescaler,
}

/// A compare-match timer driving the display scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanTimer {
    /// Timer input clock in Hz
    pub clock_hz: u32,
    /// Clock prescaler
    pub prescaler: u32,
    /// Width of the compare register in bits (1-32)
    pub compare_bits: u8,
}

impl ScanTimer {
    /// ATtiny85 Timer1 at the factory 1 MHz system clock, prescaler 16384,
    /// 8-bit OCR1A
    pub const ATTINY85_TIMER1: Self = Self {
        clock_hz: 1_000_000,
        prescaler: 16_384,
        compare_bits: 8,
    };

    /// A free-running tick counter (e.g. embassy-time) with a 32-bit alarm
    pub const fn tick_counter(tick_hz: u32) -> Self {
        Self {
            clock_hz: tick_hz,
            prescaler: 1,
            compare_bits: 32,
        }
    }

    /// Largest value the compare register holds
    pub const fn compare_max(&self) -> u32 {
        if self.compare_bits >= 32 {
            u32::MAX
        } else {
            (1u32 << self.compare_bits) - 1
        }
    }

    /// Compare value producing `scan_hz` interrupts per second
    pub fn compare_value(&self, scan_hz: u32) -> Result<u32, ConfigError> {
        if scan_hz == 0 {
            return Err(ConfigError::ZeroFrequency);
        }
        if self.prescaler == 0 {
            return Err(ConfigError::ZeroPrescaler);
        }

        let ticks = self.clock_hz / self.prescaler / scan_hz;
        if ticks == 0 {
            return Err(ConfigError::FrequencyTooHigh);
        }

        let compare = ticks - 1;
        if compare > self.compare_max() {
            return Err(ConfigError::CompareOverflow);
        }
        Ok(compare)
    }

    /// Timer ticks between two scan interrupts
    pub fn period_ticks(&self, scan_hz: u32) -> Result<u32, ConfigError> {
        self.compare_value(scan_hz).map(|compare| compare + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attiny_one_hertz() {
        // 1_000_000 / 16384 / 1 - 1
        assert_eq!(ScanTimer::ATTINY85_TIMER1.compare_value(1), Ok(60));
    }

    #[test]
    fn test_zero_frequency_rejected() {
        assert_eq!(
            ScanTimer::ATTINY85_TIMER1.compare_value(0),
            Err(ConfigError::ZeroFrequency)
        );
    }

    #[test]
    fn test_frequency_above_tick_rate_rejected() {
        assert_eq!(
            ScanTimer::ATTINY85_TIMER1.compare_value(100),
            Err(ConfigError::FrequencyTooHigh)
        );
    }

    #[test]
    fn test_compare_overflow() {
        let timer = ScanTimer {
            clock_hz: 16_000_000,
            ..ScanTimer::ATTINY85_TIMER1
        };
        // 976 ticks do not fit an 8-bit register
        assert_eq!(timer.compare_value(1), Err(ConfigError::CompareOverflow));
        assert_eq!(timer.compare_value(4), Ok(243));
    }

    #[test]
    fn test_tick_counter_period() {
        let timer = ScanTimer::tick_counter(1_000_000);
        assert_eq!(timer.period_ticks(1_000), Ok(1_000));
        assert_eq!(timer.compare_max(), u32::MAX);
    }
}
