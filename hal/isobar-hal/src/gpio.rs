//! GPIO pin abstractions
//!
//! The firmware drives three kinds of lines: the serial clock and data
//! lines, the sensor chip-select and the display latch. All of them are
//! plain push-pull outputs or floating inputs, so the traits stay
//! infallible.

/// Digital output pin
pub trait OutputPin {
    /// Drive the line high (logic 1)
    fn set_high(&mut self);

    /// Drive the line low (logic 0)
    fn set_low(&mut self);

    /// Drive the line to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the line is currently driven high
    fn is_set_high(&self) -> bool;

    /// Check if the line is currently driven low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Reads take `&mut self` because sampling may touch hardware state
/// (same convention as `embedded-hal` 1.0).
pub trait InputPin {
    /// Check if the line reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the line reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) {
        T::set_high(self)
    }

    fn set_low(&mut self) {
        T::set_low(self)
    }

    fn is_set_high(&self) -> bool {
        T::is_set_high(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(bool);

    impl OutputPin for Line {
        fn set_high(&mut self) {
            self.0 = true;
        }

        fn set_low(&mut self) {
            self.0 = false;
        }

        fn is_set_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_set_state() {
        let mut line = Line(false);

        line.set_state(true);
        assert!(line.is_set_high());

        line.set_state(false);
        assert!(line.is_set_low());
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut line = Line(false);
        {
            let mut by_ref = &mut line;
            by_ref.set_high();
        }
        assert!(line.is_set_high());
    }
}
