//! Analog input sensors
//!
//! Plain passthrough sensors: each read is a single driver sample.

use core::fmt;

use easybot_core::config::{BoardConfig, ConfigError};
use easybot_core::sensor::{analog, Sensor};
use easybot_hal::{AnalogDriver, PinDriver};

use crate::device::DeviceKind;

macro_rules! analog_input {
    ($(#[$doc:meta])* $name:ident, $kind:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            sensor: Sensor,
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
                })
            }

            /// Take one raw sample
            pub fn read<D: AnalogDriver + ?Sized>(&mut self, driver: &mut D) -> i32 {
                analog::read(&mut self.sensor, driver)
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

analog_input!(
    /// Ambient light sensor
    LightSensor,
    DeviceKind::Light
);

analog_input!(
    /// Sound level sensor
    SoundSensor,
    DeviceKind::Sound
);
