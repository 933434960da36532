//! State shared between the scan interrupt and the sensor task
//!
//! The digits travel through a lock-free [`DigitExchange`]. The serial link
//! is shared by the sensor and the display, so it sits behind a blocking
//! critical-section mutex; each byte transfer holds the lock for its full
//! 16 clock edges.

use core::cell::RefCell;

use embassy_rp::gpio::{Input, Output};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use isobar_core::traits::{ByteTransport, TransportError};
use isobar_core::DigitExchange;
use isobar_drivers::display::{LatchedSegment, SegmentScanner};
use isobar_drivers::sensor::Bmp280;
use isobar_drivers::transport::{GpioShifter, ShiftTransport};
use isobar_hal::Compat;

/// Push-pull output wrapped for the isobar drivers
pub type OutPin = Compat<Output<'static>>;

/// Serial link on the board's clock, data-out and data-in lines
pub type Link = ShiftTransport<GpioShifter<OutPin, OutPin, Compat<Input<'static>>>>;

/// Display scan driver owned by the scan task
pub type Scanner = SegmentScanner<LatchedSegment<SharedLink, OutPin>>;

/// Sensor driver owned by the sensor task
pub type Sensor = Bmp280<SharedLink, OutPin>;

/// Latest published digits
pub static DIGITS: DigitExchange = DigitExchange::new();

/// The serial link, installed once at boot
static LINK: Mutex<CriticalSectionRawMutex, RefCell<Option<Link>>> =
    Mutex::new(RefCell::new(None));

/// Hand the serial link over to [`SharedLink`] users
pub fn install_link(link: Link) {
    LINK.lock(|cell| cell.replace(Some(link)));
}

/// Handle to the shared serial link
///
/// Transfers fail with [`TransportError::BusUnavailable`] until
/// [`install_link`] has run.
pub struct SharedLink;

impl ByteTransport for SharedLink {
    fn transfer_byte(&mut self, out: u8) -> Result<u8, TransportError> {
        LINK.lock(|cell| match cell.borrow_mut().as_mut() {
            Some(link) => link.transfer_byte(out),
            None => Err(TransportError::BusUnavailable),
        })
    }
}
