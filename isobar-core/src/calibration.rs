//! Factory calibration coefficients
//!
//! Read once from the sensor at boot and never again. The coefficients are
//! handed to [`Compensator`](crate::compensation::Compensator), which is
//! their only consumer; nothing else can read the individual values.

use isobar_protocol::CalibrationBlock;

/// Six signed calibration coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationCoefficients {
    t1: i16,
    t2: i16,
    t3: i16,
    // Read for completeness; the pressure formula does not use them.
    p1: i16,
    p2: i16,
    p3: i16,
}

impl CalibrationCoefficients {
    /// Assemble the coefficients from the three word pairs, in the order of
    /// [`CALIBRATION_SEQUENCE`](isobar_protocol::CALIBRATION_SEQUENCE)
    pub const fn from_blocks(blocks: [(i16, i16); 3]) -> Self {
        let [(t1, t2), (t3, p1), (p2, p3)] = blocks;
        Self {
            t1,
            t2,
            t3,
            p1,
            p2,
            p3,
        }
    }

    /// Words stored in the given block, as read from the sensor
    pub const fn block(&self, block: CalibrationBlock) -> (i16, i16) {
        match block {
            CalibrationBlock::T1T2 => (self.t1, self.t2),
            CalibrationBlock::T3P1 => (self.t3, self.p1),
            CalibrationBlock::P2P3 => (self.p2, self.p3),
        }
    }

    pub(crate) const fn temperature(&self) -> (i16, i16, i16) {
        (self.t1, self.t2, self.t3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isobar_protocol::CALIBRATION_SEQUENCE;

    #[test]
    fn test_blocks_round_trip_in_load_order() {
        let words = [(27504, 26435), (-1000, 3000), (-10000, 8000)];
        let cal = CalibrationCoefficients::from_blocks(words);

        for (block, expected) in CALIBRATION_SEQUENCE.iter().zip(words) {
            assert_eq!(cal.block(*block), expected);
        }
        assert_eq!(cal.temperature(), (27504, 26435, -1000));
    }
}
