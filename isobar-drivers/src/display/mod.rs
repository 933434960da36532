//! 7-segment display drivers

pub mod scanner;
pub mod segment;

pub use scanner::SegmentScanner;
pub use segment::LatchedSegment;
