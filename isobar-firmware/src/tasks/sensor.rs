//! Sensor polling task
//!
//! Each cycle re-sends the configuration, reads both raw samples, runs the
//! compensation and publishes the resulting digits. A failed cycle is
//! logged and skipped; the previous digits stay on the display.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::Timer;

use isobar_core::Compensator;
use isobar_drivers::sensor::RawSamples;

use crate::board::POLL_INTERVAL_MS;
use crate::channels::{Sensor, DIGITS};

#[embassy_executor::task]
pub async fn sensor_task(mut sensor: Sensor, compensator: Compensator) {
    info!("Sensor task started");

    loop {
        // Frames run with interrupts masked so no glyph is clocked into
        // the sensor while its chip-select is asserted
        let samples = critical_section::with(|_| -> Result<RawSamples, _> {
            sensor.configure()?;
            sensor.read_samples()
        });

        match samples {
            Ok(samples) => {
                let reading = compensator.reading(samples.temperature, samples.pressure);
                trace!(
                    "raw T={} P={} -> {} C, {} Pa",
                    samples.temperature.value(),
                    samples.pressure.value(),
                    reading.celsius,
                    reading.pascals
                );

                if let Some(e) = reading.temperature_error {
                    warn!("Temperature clamped: {}", e);
                }
                if let Some(e) = reading.pressure_error {
                    warn!("Pressure clamped: {}", e);
                }

                DIGITS.publish(reading.digits);
            }
            Err(e) => warn!("Sensor read failed: {}", e),
        }

        if POLL_INTERVAL_MS == 0 {
            yield_now().await;
        } else {
            Timer::after_millis(POLL_INTERVAL_MS).await;
        }
    }
}
