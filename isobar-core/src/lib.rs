//! Board-agnostic core logic for the barometer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Transport and display traits implemented by the drivers
//! - Calibration coefficients and the compensation formulas
//! - Decimal digit decomposition of the readings
//! - The lock-free digit exchange between the polling loop and the
//!   display scan interrupt
//! - Glyph table and the 10-step display scan state machine
//! - Scan timer configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod calibration;
pub mod compensation;
pub mod config;
pub mod digits;
pub mod display;
pub mod exchange;
pub mod traits;

pub use calibration::CalibrationCoefficients;
pub use compensation::{CompensationError, Compensator, Reading};
pub use digits::{DigitSet, PressureDigits, TemperatureDigits};
pub use exchange::DigitExchange;
