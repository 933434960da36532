//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the driver implementations.

pub mod display;
pub mod transport;

pub use display::SegmentDisplay;
pub use transport::{ByteTransport, TransportError};
