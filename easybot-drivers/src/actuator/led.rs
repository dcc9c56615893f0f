//! LED
//!
//! Brightness is set through PWM power. On/off state is derived from the
//! last value written.

use core::fmt;

use easybot_core::actuator::{PowerRequest, PwmOutput};
use easybot_core::config::{BoardConfig, ConfigError};
use easybot_core::sensor::Sensor;
use easybot_hal::{AnalogDriver, DriverError, PinDriver};

use crate::device::DeviceKind;

/// PWM-dimmable LED
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Led {
    output: PwmOutput,
}

impl Led {
    /// Bind to the default port
    pub fn new<D: PinDriver + ?Sized>(
        config: &BoardConfig,
        driver: &mut D,
    ) -> Result<Self, ConfigError> {
        Self::on_port(config, DeviceKind::Led.default_port(), driver)
    }

    /// Bind to `port`
    pub fn on_port<D: PinDriver + ?Sized>(
        config: &BoardConfig,
        port: &str,
        driver: &mut D,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            output: PwmOutput::new(&config.ports, port, DeviceKind::Led.descriptor(), driver)?,
        })
    }

    /// Light at `power` (0-254)
    pub fn light_on<D, P>(&mut self, driver: &mut D, power: &P) -> Result<(), DriverError>
    where
        D: AnalogDriver + ?Sized,
        P: PowerRequest + ?Sized,
    {
        self.output.set_power(driver, power)
    }

    pub fn light_off<D: AnalogDriver + ?Sized>(&mut self, driver: &mut D) -> Result<(), DriverError> {
        self.output.off(driver)
    }

    pub fn is_on(&self) -> bool {
        self.output.sensor().last_value() > 0
    }

    pub fn is_off(&self) -> bool {
        self.output.sensor().last_value() == 0
    }

    pub fn power(&self) -> i32 {
        self.output.power()
    }

    pub fn sensor(&self) -> &Sensor {
        self.output.sensor()
    }
}

impl fmt::Display for Led {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.output.sensor(), f)
    }
}
