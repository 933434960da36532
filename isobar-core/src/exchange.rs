//! Lock-free digit exchange between the polling loop and the scan interrupt
//!
//! The polling loop produces a complete [`DigitSet`] per cycle; the display
//! scan interrupt reads one digit per tick. The whole set is packed into a
//! single 32-bit word, so publishing is one store and reading is one load.
//! A scan can therefore never observe a half-written update, and the
//! interrupt path takes no lock.
//!
//! Only load and store are used, which every target (including Cortex-M0)
//! performs natively on 32-bit words.

use portable_atomic::{AtomicU32, Ordering};

use crate::digits::DigitSet;

/// Marks a word that holds a published digit set
const PUBLISHED: u32 = 1 << 31;

/// Single-word mailbox holding the most recently published digits
#[derive(Debug)]
pub struct DigitExchange {
    word: AtomicU32,
}

impl Default for DigitExchange {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitExchange {
    /// Create an empty exchange; [`snapshot`](Self::snapshot) returns `None`
    /// until the first publish
    pub const fn new() -> Self {
        Self {
            word: AtomicU32::new(0),
        }
    }

    /// Replace the published digits
    pub fn publish(&self, digits: DigitSet) {
        self.word.store(digits.pack() | PUBLISHED, Ordering::Release);
    }

    /// Most recently published digits, if any
    pub fn snapshot(&self) -> Option<DigitSet> {
        let word = self.word.load(Ordering::Acquire);
        if word & PUBLISHED == 0 {
            return None;
        }
        Some(DigitSet::unpack(word))
    }

    /// Check whether anything has been published yet
    pub fn is_published(&self) -> bool {
        self.word.load(Ordering::Acquire) & PUBLISHED != 0
    }
}
