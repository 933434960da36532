//! Serial transport drivers

pub mod gpio;
pub mod shift;

pub use gpio::GpioShifter;
pub use shift::{ShiftTransport, DEFAULT_MAX_TOGGLES};
