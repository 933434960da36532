//! Sensor Register Protocol
//!
//! This crate defines the byte-level protocol spoken to the temperature /
//! pressure sensor over the synchronous serial link. Every exchange is
//! bracketed by the sensor's chip-select:
//!
//! ```text
//!  CS   ‾‾‾|________________________________|‾‾‾
//!  OUT      │ CMD │ 0x00 │ 0x00 │ ... │
//!  IN       │  -- │ R0   │ R1   │ ... │
//! ```
//!
//! - Configuration writes two mode bytes and expects no reply.
//! - Calibration reads send one register address and clock out four reply
//!   bytes: two little-endian signed words.
//! - Sample reads send one register address and clock out three reply bytes
//!   that pack a 20-bit ADC value.
//!
//! The register codes are treated as opaque constants; they are kept in
//! one closed enumeration ([`Command`]) so the protocol can be tested
//! without hardware.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod sample;

pub use command::{CalibrationBlock, Command, SampleRegister, CALIBRATION_SEQUENCE, DUMMY_BYTE};
pub use sample::{combine_word, RawSample, SAMPLE_BITS};
