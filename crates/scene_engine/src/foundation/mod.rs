//! Foundation utilities shared by every engine module
//!
//! Math type aliases, frame timing, and logging setup.

pub mod logging;
pub mod math;
pub mod time;
