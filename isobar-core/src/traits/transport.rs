//! Byte transport trait
//!
//! The sensor and the display shift register share one synchronous serial
//! link. Both are driven one byte at a time through this trait.

/// Errors that can occur on the serial link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// The shift did not complete within the allowed number of clock edges
    Timeout,
    /// The shared link has not been installed yet
    BusUnavailable,
}

/// Full-duplex, one-byte-at-a-time serial transport
pub trait ByteTransport {
    /// Shift `out` onto the data line while capturing one byte in
    ///
    /// Exactly eight clock pulses are generated. The returned byte is
    /// whatever the peer drove during those pulses, which is meaningless
    /// for write-only bytes.
    fn transfer_byte(&mut self, out: u8) -> Result<u8, TransportError>;

    /// Write a sequence of bytes, discarding whatever is clocked in
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        for &byte in bytes {
            self.transfer_byte(byte)?;
        }
        Ok(())
    }
}

impl<T: ByteTransport + ?Sized> ByteTransport for &mut T {
    fn transfer_byte(&mut self, out: u8) -> Result<u8, TransportError> {
        T::transfer_byte(self, out)
    }
}
