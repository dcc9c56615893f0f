//! Digital input sensors
//!
//! Reads go through the board's digital read policy and return 0, 1, or
//! -1 once the retry budget is spent.

use core::fmt;

use easybot_core::config::{BoardConfig, ConfigError};
use easybot_core::sensor::{digital, DigitalReadPolicy, Sensor};
use easybot_hal::PinDriver;

use crate::device::DeviceKind;

macro_rules! digital_input {
    ($(#[$doc:meta])* $name:ident, $kind:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            sensor: Sensor,
            policy: DigitalReadPolicy,
        }

        impl $name {
            /// Bind to the default port
            pub fn new<D: PinDriver + ?Sized>(
                config: &BoardConfig,
                driver: &mut D,
            ) -> Result<Self, ConfigError> {
                Self::on_port(config, $kind.default_port(), driver)
            }

            /// Bind to `port`
            pub fn on_port<D: PinDriver + ?Sized>(
                config: &BoardConfig,
                port: &str,
                driver: &mut D,
            ) -> Result<Self, ConfigError> {
                Ok(Self {
                    sensor: $kind.bind(config, port, driver)?,
                    policy: config.digital,
                })
            }

            /// Read the pin level: 0, 1, or -1 on repeated failure
            pub fn read<D: PinDriver + ?Sized>(&self, driver: &mut D) -> i32 {
                digital::read(&self.sensor, driver, &self.policy)
            }

            pub fn sensor(&self) -> &Sensor {
                &self.sensor
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.sensor, f)
            }
        }
    };
}

digital_input!(
    /// Push button
    ButtonSensor,
    DeviceKind::Button
);

digital_input!(
    /// PIR motion detector
    MotionSensor,
    DeviceKind::Motion
);
