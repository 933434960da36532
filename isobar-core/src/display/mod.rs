//! Single-digit 7-segment display
//!
//! One digit shows the readings one glyph at a time, driven by a periodic
//! interrupt that walks a fixed 10-step cycle:
//!
//! ```text
//!  2  5  .  0  C  4  5  0  P  (idle)
//!  └ temperature ┘  └ pressure ┘
//! ```

pub mod glyph;
pub mod scan;

pub use glyph::{digit_glyph, BLANK, DECIMAL_POINT, GLYPHS, GLYPH_CELSIUS, GLYPH_PASCAL};
pub use scan::{DisplayScanner, ScanState, ScanStep, SCAN_STEPS};
