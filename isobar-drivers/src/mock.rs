//! Test doubles for pins and the serial link

use core::cell::{Cell, RefCell};

use heapless::Vec;
use isobar_core::traits::{ByteTransport, TransportError};
use isobar_hal::gpio::{InputPin, OutputPin};

const LOG_CAPACITY: usize = 128;

/// A single wire, shared by every pin connected to it
pub struct Wire {
    level: Cell<bool>,
    rises: Cell<u32>,
}

impl Wire {
    pub fn new() -> Self {
        Self {
            level: Cell::new(false),
            rises: Cell::new(0),
        }
    }

    pub fn drive(&self, high: bool) {
        if high && !self.level.get() {
            self.rises.set(self.rises.get() + 1);
        }
        self.level.set(high);
    }

    pub fn level(&self) -> bool {
        self.level.get()
    }

    pub fn rising_edges(&self) -> u32 {
        self.rises.get()
    }
}

/// Pin attached to a [`Wire`]
pub struct LinePin<'a>(pub &'a Wire);

impl OutputPin for LinePin<'_> {
    fn set_high(&mut self) {
        self.0.drive(true);
    }

    fn set_low(&mut self) {
        self.0.drive(false);
    }

    fn is_set_high(&self) -> bool {
        self.0.level()
    }
}

impl InputPin for LinePin<'_> {
    fn is_high(&mut self) -> bool {
        self.0.level()
    }
}

/// Something observed on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A named control line changed level
    Line(&'static str, bool),
    /// A byte was shifted out
    Byte(u8),
}

/// Bus recorder with a scripted peer
///
/// The peer answers the n-th transferred byte with `replies[n]` (zero once
/// the script runs out).
pub struct Bus {
    events: RefCell<Vec<Event, LOG_CAPACITY>>,
    replies: Vec<u8, LOG_CAPACITY>,
    transferred: Cell<usize>,
    fail_at: Cell<Option<usize>>,
}

impl Bus {
    pub fn new(replies: &[u8]) -> Self {
        let mut script = Vec::new();
        let _ = script.extend_from_slice(replies);
        Self {
            events: RefCell::new(Vec::new()),
            replies: script,
            transferred: Cell::new(0),
            fail_at: Cell::new(None),
        }
    }

    /// Make the transfer with index `n` time out
    pub fn fail_at(&self, n: usize) {
        self.fail_at.set(Some(n));
    }

    pub fn events(&self) -> Vec<Event, LOG_CAPACITY> {
        self.events.borrow().clone()
    }

    /// Bytes shifted out, in order
    pub fn sent(&self) -> Vec<u8, LOG_CAPACITY> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Byte(b) => Some(*b),
                Event::Line(..) => None,
            })
            .collect()
    }

    fn record(&self, event: Event) {
        let _ = self.events.borrow_mut().push(event);
    }
}

/// [`ByteTransport`] end of a [`Bus`]
pub struct BusTransport<'a>(pub &'a Bus);

impl ByteTransport for BusTransport<'_> {
    fn transfer_byte(&mut self, out: u8) -> Result<u8, TransportError> {
        let n = self.0.transferred.get();
        if self.0.fail_at.get() == Some(n) {
            return Err(TransportError::Timeout);
        }
        self.0.transferred.set(n + 1);
        self.0.record(Event::Byte(out));
        Ok(self.0.replies.get(n).copied().unwrap_or(0))
    }
}

/// Named control line (chip-select, latch) that logs into a [`Bus`]
pub struct BusPin<'a> {
    bus: &'a Bus,
    name: &'static str,
    high: bool,
}

impl<'a> BusPin<'a> {
    pub fn new(bus: &'a Bus, name: &'static str) -> Self {
        Self {
            bus,
            name,
            high: false,
        }
    }
}

impl OutputPin for BusPin<'_> {
    fn set_high(&mut self) {
        self.high = true;
        self.bus.record(Event::Line(self.name, true));
    }

    fn set_low(&mut self) {
        self.high = false;
        self.bus.record(Event::Line(self.name, false));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
