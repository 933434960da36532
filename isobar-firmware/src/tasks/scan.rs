//! Display scan task
//!
//! One tick per scan period. Each tick shows one glyph of the current
//! digits; ten ticks make a full cycle.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::{Scanner, DIGITS};

#[embassy_executor::task]
pub async fn scan_task(mut scanner: Scanner, period: Duration) {
    info!("Scan task started, period {} us", period.as_micros());

    let mut ticker = Ticker::every(period);

    loop {
        ticker.next().await;

        let state = scanner.state();
        if let Err(e) = scanner.on_tick(&DIGITS) {
            warn!("Display shift failed in state {}: {}", state.value(), e);
        }
    }
}
