//! Line follower
//!
//! Five element reflectance array on the I2C port. Offers three views of
//! the array: raw reflectance, calibrated binary frame, and a position
//! label from the classifier.

use core::fmt;

use easybot_core::config::{BoardConfig, ConfigError};
use easybot_core::line::{classify, LinePosition};
use easybot_core::sensor::Sensor;
use easybot_core::sentinel::LINE_READ_FAILED;
use easybot_hal::{LineArray, LINE_ARRAY_LEN};

use crate::device::DeviceKind;

/// Line follower module
#[derive(Debug)]
pub struct LineFollower<L> {
    sensor: Sensor,
    array: L,
}

impl<L: LineArray> LineFollower<L> {
    /// Bind to the default port
    ///
    /// Fails with [`ConfigError::ModuleUnavailable`] when no line module
    /// is installed.
    pub fn new(config: &BoardConfig, array: Option<L>) -> Result<Self, ConfigError> {
        Self::on_port(config, DeviceKind::LineFollower.default_port(), array)
    }

    /// Bind to `port`
    pub fn on_port(config: &BoardConfig, port: &str, array: Option<L>) -> Result<Self, ConfigError> {
        let Some(array) = array else {
            #[cfg(feature = "defmt")]
            defmt::warn!("line follower module not installed");
            return Err(ConfigError::ModuleUnavailable);
        };
        Ok(Self {
            sensor: DeviceKind::LineFollower.bind_bus(config, port)?,
            array,
        })
    }

    /// Raw reflectance (0-1023) per element, all -1 on a read error
    ///
    /// Calibration is left to the caller.
    pub fn read_raw_sensors(&mut self) -> [i32; LINE_ARRAY_LEN] {
        self.array.read_raw().unwrap_or(LINE_READ_FAILED)
    }

    /// Calibrated frame, 1 where the element sees the line, all -1 on a
    /// read error
    pub fn read(&mut self) -> [i32; LINE_ARRAY_LEN] {
        self.array.read_normalized().unwrap_or(LINE_READ_FAILED)
    }

    /// Where the line is relative to the robot
    pub fn read_position(&mut self) -> LinePosition {
        classify(&self.read())
    }
}

impl<L> LineFollower<L> {
    pub fn sensor(&self) -> &Sensor {
        &self.sensor
    }

    pub fn array(&self) -> &L {
        &self.array
    }

    pub fn array_mut(&mut self) -> &mut L {
        &mut self.array
    }
}

impl<L> fmt::Display for LineFollower<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.sensor, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easybot_core::sensor::PinMode;
    use easybot_hal::mock::MockLineArray;
    use easybot_hal::DriverError;
    use std::string::ToString;

    #[test]
    fn test_missing_module() {
        let config = BoardConfig::gopigo();
        let result = LineFollower::<MockLineArray>::new(&config, None);
        assert!(matches!(result, Err(ConfigError::ModuleUnavailable)));
    }

    #[test]
    fn test_positions() {
        let config = BoardConfig::gopigo();
        let mut line = LineFollower::new(&config, Some(MockLineArray::seeing([0, 0, 1, 0, 0])))
            .unwrap();

        assert_eq!(line.sensor().pin_mode(), PinMode::SerialIgnored);
        assert_eq!(line.to_string(), "Line Follower on port I2C");
        assert_eq!(line.read_position(), LinePosition::Center);

        line.array_mut().set_pattern([1, 1, 1, 0, 0]);
        assert_eq!(line.read_position(), LinePosition::Left);

        line.array_mut().set_pattern([0, 1, 1, 1, 1]);
        assert_eq!(line.read_position(), LinePosition::Right);

        line.array_mut().set_pattern([1, 1, 1, 1, 1]);
        assert_eq!(line.read_position(), LinePosition::Black);
    }

    #[test]
    fn test_raw_sensors() {
        let config = BoardConfig::gopigo();
        let mut line = LineFollower::new(&config, Some(MockLineArray::seeing([0, 0, 1, 1, 0])))
            .unwrap();

        assert_eq!(line.read_raw_sensors(), [0, 0, 1023, 1023, 0]);
        assert_eq!(line.read(), [0, 0, 1, 1, 0]);
        assert_eq!(line.array().reads, 2);
    }

    #[test]
    fn test_read_error_collapses_to_sentinel() {
        let config = BoardConfig::gopigo();
        let mut line =
            LineFollower::new(&config, Some(MockLineArray::failing(DriverError::Bus))).unwrap();

        assert_eq!(line.read_raw_sensors(), LINE_READ_FAILED);
        assert_eq!(line.read(), LINE_READ_FAILED);
        assert_eq!(line.read_position(), LinePosition::Unknown);
    }

    #[test]
    fn test_unknown_port() {
        let config = BoardConfig::gopigo();
        let result = LineFollower::on_port(&config, "I2C2", Some(MockLineArray::seeing([0; 5])));
        assert!(matches!(result, Err(ConfigError::UnknownPort)));
    }

    #[test]
    fn test_analog_port_rejected() {
        let config = BoardConfig::gopigo();
        let result = LineFollower::on_port(&config, "A1", Some(MockLineArray::seeing([0; 5])));
        assert!(matches!(result, Err(ConfigError::PortClassMismatch)));
    }
}
