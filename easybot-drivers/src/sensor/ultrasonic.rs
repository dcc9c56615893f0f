//! Ultrasonic rangefinder
//!
//! Distances are limited to 5 m. [`UltrasonicSensor::read`] averages
//! several in-range echoes and returns 501 when nothing is within range.

use core::fmt;

use easybot_core::config::{BoardConfig, ConfigError};
use easybot_core::filter::UltrasonicFilter;
use easybot_core::sensor::Sensor;
use easybot_hal::{PinDriver, RangingDriver};

use crate::device::DeviceKind;

/// Ultrasonic distance sensor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UltrasonicSensor {
    sensor: Sensor,
    filter: UltrasonicFilter,
    safe_distance: i32,
}

impl UltrasonicSensor {
    /// Bind to the default port
    pub fn new<D: PinDriver + ?Sized>(
        config: &BoardConfig,
        driver: &mut D,
    ) -> Result<Self, ConfigError> {
        Self::on_port(config, DeviceKind::Ultrasonic.default_port(), driver)
    }

    /// Bind to `port`
    pub fn on_port<D: PinDriver + ?Sized>(
        config: &BoardConfig,
        port: &str,
        driver: &mut D,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            sensor: DeviceKind::Ultrasonic.bind(config, port, driver)?,
            filter: config.ultrasonic,
            safe_distance: config.safe_distance,
        })
    }

    /// Filtered distance, or 501 when nothing is in range
    pub fn read<D: RangingDriver + ?Sized>(&self, driver: &mut D) -> i32 {
        self.filter.read(&self.sensor, driver)
    }

    /// Check a single raw echo against the safe distance
    ///
    /// Uses the uncorrected primitive and no averaging, so it can disagree
    /// with [`read`](Self::read) near the threshold.
    pub fn is_too_close<D: RangingDriver + ?Sized>(&self, driver: &mut D) -> bool {
        driver.distance(self.sensor.pin()) < self.safe_distance
    }

    pub fn safe_distance(&self) -> i32 {
        self.safe_distance
    }

    pub fn set_safe_distance(&mut self, distance: i32) {
        self.safe_distance = distance;
    }

    pub fn sensor(&self) -> &Sensor {
        &self.sensor
    }
}

impl fmt::Display for UltrasonicSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.sensor, f)
    }
}
