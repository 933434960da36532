//! `embedded-hal` 1.0 adapters
//!
//! Chip HALs (embassy-rp, rp2040-hal, ...) implement the `embedded-hal`
//! digital traits. Wrapping such a pin in [`Compat`] makes it usable by the
//! Isobar drivers. Only pins with an infallible error type are accepted,
//! which is the case for on-chip GPIO.

use core::convert::Infallible;

use embedded_hal::digital;

use crate::gpio::{InputPin, OutputPin};

/// Adapter from an `embedded-hal` pin to the Isobar GPIO traits
///
/// Keeps a copy of the level last driven so `is_set_high` works through a
/// shared reference.
#[derive(Debug)]
pub struct Compat<P> {
    pin: P,
    driven_high: bool,
}

impl<P> Compat<P> {
    /// Wrap a pin whose current output level is `initial_high`
    ///
    /// For input pins the level is ignored.
    pub const fn new(pin: P, initial_high: bool) -> Self {
        Self {
            pin,
            driven_high: initial_high,
        }
    }

    /// Return the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for Compat<P>
where
    P: digital::OutputPin + digital::ErrorType<Error = Infallible>,
{
    fn set_high(&mut self) {
        infallible(self.pin.set_high());
        self.driven_high = true;
    }

    fn set_low(&mut self) {
        infallible(self.pin.set_low());
        self.driven_high = false;
    }

    fn is_set_high(&self) -> bool {
        self.driven_high
    }
}

impl<P> InputPin for Compat<P>
where
    P: digital::InputPin + digital::ErrorType<Error = Infallible>,
{
    fn is_high(&mut self) -> bool {
        infallible(self.pin.is_high())
    }
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePin {
        level: bool,
    }

    impl digital::ErrorType for FakePin {
        type Error = Infallible;
    }

    impl digital::OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.level = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.level = true;
            Ok(())
        }
    }

    impl digital::InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.level)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.level)
        }
    }

    #[test]
    fn test_output_tracks_driven_level() {
        let mut pin = Compat::new(FakePin { level: true }, true);
        assert!(pin.is_set_high());

        OutputPin::set_low(&mut pin);
        assert!(pin.is_set_low());
        assert!(!pin.into_inner().level);
    }

    #[test]
    fn test_input_reads_through() {
        let mut pin = Compat::new(FakePin { level: true }, false);
        assert!(InputPin::is_high(&mut pin));
        assert!(!InputPin::is_low(&mut pin));
    }
}
