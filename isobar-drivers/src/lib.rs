//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in isobar-core:
//!
//! - Serial transport (bounded-poll shift transport, GPIO software shifter)
//! - Sensor register protocol (configuration, calibration, raw samples)
//! - Latched 7-segment display and its scan driver

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod sensor;
pub mod transport;

#[cfg(test)]
mod mock;
