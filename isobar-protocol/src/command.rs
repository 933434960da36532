//! Command codes understood by the sensor
//!
//! | command | bytes sent | reply bytes | meaning |
//! |---|---|---|---|
//! | `Configure` | `0x74 0x43` | 0 | continuous temperature + pressure sampling |
//! | `Calibration(T1T2)` | `0x88` | 4 | coefficients T1, T2 |
//! | `Calibration(T3P1)` | `0x8A` | 4 | coefficients T3, P1 |
//! | `Calibration(P2P3)` | `0x8E` | 4 | coefficients P2, P3 |
//! | `Sample(Temperature)` | `0xFA` | 3 | raw 20-bit temperature |
//! | `Sample(Pressure)` | `0xFB` | 3 | raw 20-bit pressure |

/// Byte clocked out while reading a reply
pub const DUMMY_BYTE: u8 = 0x00;

/// Mode byte selecting continuous temperature sampling
const MODE_TEMPERATURE: u8 = 0x74;

/// Mode byte selecting continuous pressure sampling
const MODE_PRESSURE: u8 = 0x43;

/// Register block holding two calibration coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CalibrationBlock {
    /// Temperature coefficients T1 and T2
    T1T2 = 0x88,
    /// Temperature coefficient T3 and pressure coefficient P1
    T3P1 = 0x8A,
    /// Pressure coefficients P2 and P3
    P2P3 = 0x8E,
}

/// Fixed order in which calibration blocks are read at boot
pub const CALIBRATION_SEQUENCE: [CalibrationBlock; 3] = [
    CalibrationBlock::T1T2,
    CalibrationBlock::T3P1,
    CalibrationBlock::P2P3,
];

impl CalibrationBlock {
    /// Register address sent to select this block
    pub const fn address(self) -> u8 {
        self as u8
    }
}

/// Register holding a raw ADC sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SampleRegister {
    /// Raw temperature
    Temperature = 0xFA,
    /// Raw pressure
    Pressure = 0xFB,
}

impl SampleRegister {
    /// Register address sent to select this sample
    pub const fn address(self) -> u8 {
        self as u8
    }
}

/// Every exchange the firmware performs with the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Select continuous sampling for temperature and pressure
    Configure,
    /// Read a pair of calibration coefficients
    Calibration(CalibrationBlock),
    /// Read a raw 20-bit sample
    Sample(SampleRegister),
}

impl Command {
    /// Bytes written to the sensor before any reply is clocked in
    pub fn request(&self) -> &'static [u8] {
        match self {
            Command::Configure => &[MODE_TEMPERATURE, MODE_PRESSURE],
            Command::Calibration(CalibrationBlock::T1T2) => &[0x88],
            Command::Calibration(CalibrationBlock::T3P1) => &[0x8A],
            Command::Calibration(CalibrationBlock::P2P3) => &[0x8E],
            Command::Sample(SampleRegister::Temperature) => &[0xFA],
            Command::Sample(SampleRegister::Pressure) => &[0xFB],
        }
    }

    /// Number of dummy transfers needed to clock in the reply
    pub const fn reply_len(&self) -> usize {
        match self {
            Command::Configure => 0,
            Command::Calibration(_) => 4,
            Command::Sample(_) => 3,
        }
    }

    /// Total number of bytes clocked while chip-select is asserted
    pub fn frame_len(&self) -> usize {
        self.request().len() + self.reply_len()
    }
}

impl From<CalibrationBlock> for Command {
    fn from(block: CalibrationBlock) -> Self {
        Command::Calibration(block)
    }
}

impl From<SampleRegister> for Command {
    fn from(register: SampleRegister) -> Self {
        Command::Sample(register)
    }
}
