//! BMP280-style temperature / pressure sensor on the shared serial link
//!
//! Every exchange is one chip-select frame: assert CS, transfer the command
//! and reply bytes, release CS. CS is released even when a transfer fails,
//! so one bad byte cannot leave the sensor selected while the display
//! uses the link.

use isobar_core::calibration::CalibrationCoefficients;
use isobar_core::traits::{ByteTransport, TransportError};
use isobar_hal::gpio::OutputPin;
use isobar_protocol::{
    combine_word, CalibrationBlock, Command, RawSample, SampleRegister, CALIBRATION_SEQUENCE,
    DUMMY_BYTE,
};

/// One temperature and one pressure sample from the same polling cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSamples {
    pub temperature: RawSample,
    pub pressure: RawSample,
}

/// Sensor driver
///
/// `CS` is the active-low chip-select line.
pub struct Bmp280<T, CS> {
    transport: T,
    cs: CS,
}

impl<T, CS> Bmp280<T, CS>
where
    T: ByteTransport,
    CS: OutputPin,
{
    /// Create a driver; chip-select is driven high (deselected)
    pub fn new(transport: T, mut cs: CS) -> Self {
        cs.set_high();
        Self { transport, cs }
    }

    /// Release the transport and chip-select
    pub fn release(self) -> (T, CS) {
        (self.transport, self.cs)
    }

    /// Run `exchange` with chip-select asserted
    fn frame<R>(
        &mut self,
        exchange: impl FnOnce(&mut T) -> Result<R, TransportError>,
    ) -> Result<R, TransportError> {
        self.cs.set_low();
        let result = exchange(&mut self.transport);
        self.cs.set_high();
        result
    }

    /// Write `command`, then clock in `N` reply bytes
    fn transact<const N: usize>(&mut self, command: Command) -> Result<[u8; N], TransportError> {
        debug_assert_eq!(command.reply_len(), N);
        self.frame(|t| {
            t.write_all(command.request())?;
            let mut reply = [0u8; N];
            for byte in reply.iter_mut() {
                *byte = t.transfer_byte(DUMMY_BYTE)?;
            }
            Ok(reply)
        })
    }

    /// Select continuous temperature and pressure sampling
    pub fn configure(&mut self) -> Result<(), TransportError> {
        self.transact::<0>(Command::Configure).map(|_| ())
    }

    /// Read two consecutive signed words starting at `block`
    pub fn read_pair(&mut self, block: CalibrationBlock) -> Result<(i16, i16), TransportError> {
        let [lo1, hi1, lo2, hi2] = self.transact::<4>(block.into())?;
        Ok((combine_word(lo1, hi1), combine_word(lo2, hi2)))
    }

    /// Read the three raw bytes of a sample register
    pub fn read_triple(&mut self, register: SampleRegister) -> Result<[u8; 3], TransportError> {
        self.transact::<3>(register.into())
    }

    /// Read and reconstruct a 20-bit sample
    pub fn read_sample(&mut self, register: SampleRegister) -> Result<RawSample, TransportError> {
        self.read_triple(register).map(RawSample::from_bytes)
    }

    /// Read temperature then pressure
    pub fn read_samples(&mut self) -> Result<RawSamples, TransportError> {
        let temperature = self.read_sample(SampleRegister::Temperature)?;
        let pressure = self.read_sample(SampleRegister::Pressure)?;
        Ok(RawSamples {
            temperature,
            pressure,
        })
    }

    /// Read all six calibration coefficients
    ///
    /// Blocks are read in the fixed order T1/T2, T3/P1, P2/P3.
    pub fn load_calibration(&mut self) -> Result<CalibrationCoefficients, TransportError> {
        let mut blocks = [(0i16, 0i16); 3];
        for (slot, block) in blocks.iter_mut().zip(CALIBRATION_SEQUENCE) {
            *slot = self.read_pair(block)?;
        }
        Ok(CalibrationCoefficients::from_blocks(blocks))
    }
}
