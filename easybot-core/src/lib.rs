//! Board-agnostic signal acquisition for the Easybot controller
//!
//! This crate contains every decision the sensor layer makes on top of
//! the raw driver primitives:
//!
//! - Port registry and board configuration
//! - Sensor capability model (analog, digital, bus)
//! - Bounded retry policy for flaky digital reads
//! - Outlier-rejecting ultrasonic averaging
//! - Line array position classifier
//! - Power clamping for PWM actuators
//!
//! Failed reads are never surfaced as errors. They come back as the
//! sentinels in [`sentinel`], which callers must check for explicitly.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod actuator;
pub mod config;
pub mod filter;
pub mod line;
pub mod sensor;

/// Sentinel readings returned in place of errors
pub mod sentinel {
    use easybot_hal::LINE_ARRAY_LEN;

    /// Digital read gave up after the retry budget
    pub const READ_FAILED: i32 = -1;

    /// Ultrasonic filter found nothing within range
    pub const OUT_OF_RANGE: i32 = 501;

    /// Line array read failed
    pub const LINE_READ_FAILED: [i32; LINE_ARRAY_LEN] = [-1; LINE_ARRAY_LEN];
}
