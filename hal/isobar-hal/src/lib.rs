//! Isobar Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the Isobar drivers
//! are written against. A board crate (or the firmware binary) provides
//! implementations for its chip.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  isobar-firmware                        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  isobar-drivers (transport, sensor,     │
//! │  7-segment display)                     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  isobar-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O (chip-select,
//!   latch, clock and data lines)
//! - [`shift::ClockedShifter`] - Software-clocked 8-bit shift register
//!
//! [`compat`] adapts any `embedded-hal` 1.0 pin with an infallible error
//! type to the traits above.

#![no_std]
#![deny(unsafe_code)]

pub mod compat;
pub mod gpio;
pub mod shift;

// Re-export key traits at crate root for convenience
pub use compat::Compat;
pub use gpio::{InputPin, OutputPin};
pub use shift::ClockedShifter;
