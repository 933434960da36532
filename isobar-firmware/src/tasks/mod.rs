//! Embassy async tasks
//!
//! The scan task runs on the interrupt executor, the sensor task in thread
//! mode. They share only the digit exchange and the serial link.

pub mod scan;
pub mod sensor;

pub use scan::scan_task;
pub use sensor::sensor_task;
