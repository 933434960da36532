//! Isobar - Barometer / Thermometer Firmware
//!
//! Main firmware binary for RP2040-based boards. Reads a BMP280-style
//! sensor over a software-clocked serial link and scans temperature and
//! pressure onto a single 7-segment digit.
//!
//! Two executors split the work: a thread-mode executor polls the sensor,
//! and an interrupt executor at higher priority runs the display scan so a
//! scan tick preempts the polling loop like a timer interrupt would.
//!
//! Wiring:
//! - GPIO2 serial clock, GPIO3 data out, GPIO4 data in
//! - GPIO5 sensor chip-select (active low)
//! - GPIO6 display latch

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::Duration;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use isobar_core::config::ScanTimer;
use isobar_core::Compensator;
use isobar_drivers::display::{LatchedSegment, SegmentScanner};
use isobar_drivers::sensor::Bmp280;
use isobar_drivers::transport::{GpioShifter, ShiftTransport};
use isobar_hal::Compat;

use crate::channels::{install_link, SharedLink};

mod channels;
mod tasks;

/// Constants generated from board.toml by build.rs
mod board {
    include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
}

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Isobar firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Serial link: clock idles low
    let clock = Compat::new(Output::new(p.PIN_2, Level::Low), false);
    let data_out = Compat::new(Output::new(p.PIN_3, Level::Low), false);
    let data_in = Compat::new(Input::new(p.PIN_4, Pull::None), false);
    let shifter = GpioShifter::new(clock, data_out, data_in);
    install_link(ShiftTransport::with_max_toggles(shifter, board::MAX_TOGGLES));
    info!("Serial link installed, {} toggles per byte", board::MAX_TOGGLES);

    // Chip-select and latch both idle high
    let cs = Compat::new(Output::new(p.PIN_5, Level::High), true);
    let latch = Compat::new(Output::new(p.PIN_6, Level::High), true);

    let mut sensor = Bmp280::new(SharedLink, cs);
    let scanner = SegmentScanner::new(LatchedSegment::new(SharedLink, latch));

    // Calibration must be in place before the first scan tick
    let compensator = match sensor.load_calibration() {
        Ok(calibration) => {
            info!("Calibration loaded: {}", calibration);
            Some(Compensator::new(calibration))
        }
        Err(e) => {
            error!("Calibration read failed: {}, sensor disabled", e);
            None
        }
    };

    let period = match ScanTimer::tick_counter(embassy_time::TICK_HZ as u32).period_ticks(board::SCAN_HZ) {
        Ok(ticks) => Duration::from_ticks(ticks as u64),
        Err(e) => {
            warn!("Scan rate {} Hz not reachable: {}, using 1 Hz", board::SCAN_HZ, e);
            Duration::from_secs(1)
        }
    };

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawner.spawn(tasks::scan_task(scanner, period)).unwrap();
    info!("Scan task spawned at {} Hz", board::SCAN_HZ);

    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        if let Some(compensator) = compensator {
            spawner.spawn(tasks::sensor_task(sensor, compensator)).unwrap();
        }
        info!("All tasks spawned, firmware running");
    })
}
