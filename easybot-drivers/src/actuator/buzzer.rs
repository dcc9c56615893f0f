//! Buzzer
//!
//! Volume is set through PWM power from 0 (silent) to 254 (loudest).

use core::fmt;

use easybot_core::actuator::{PowerRequest, PwmOutput, MAX_POWER};
use easybot_core::config::{BoardConfig, ConfigError};
use easybot_core::sensor::Sensor;
use easybot_hal::{AnalogDriver, DriverError, PinDriver};

use crate::device::DeviceKind;

/// PWM buzzer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buzzer {
    output: PwmOutput,
}

impl Buzzer {
    /// Bind to the default port
    pub fn new<D: PinDriver + ?Sized>(
        config: &BoardConfig,
        driver: &mut D,
    ) -> Result<Self, ConfigError> {
        Self::on_port(config, DeviceKind::Buzzer.default_port(), driver)
    }

    /// Bind to `port`
    ///
    /// The recorded power starts at full volume; nothing is written until
    /// the first call.
    pub fn on_port<D: PinDriver + ?Sized>(
        config: &BoardConfig,
        port: &str,
        driver: &mut D,
    ) -> Result<Self, ConfigError> {
        let output = PwmOutput::new(&config.ports, port, DeviceKind::Buzzer.descriptor(), driver)?;
        Ok(Self {
            output: output.with_power(MAX_POWER),
        })
    }

    /// Sound at `power`; text and numbers are accepted
    ///
    /// Anything that is not an integer turns the buzzer off, as does a
    /// negative power.
    pub fn sound<D, P>(&mut self, driver: &mut D, power: &P) -> Result<(), DriverError>
    where
        D: AnalogDriver + ?Sized,
        P: PowerRequest + ?Sized,
    {
        self.output.set_power(driver, power)
    }

    /// Maximum volume
    pub fn sound_on<D: AnalogDriver + ?Sized>(&mut self, driver: &mut D) -> Result<(), DriverError> {
        self.output.full(driver)
    }

    /// Silence
    pub fn sound_off<D: AnalogDriver + ?Sized>(&mut self, driver: &mut D) -> Result<(), DriverError> {
        self.output.off(driver)
    }

    pub fn power(&self) -> i32 {
        self.output.power()
    }

    pub fn sensor(&self) -> &Sensor {
        self.output.sensor()
    }
}

impl fmt::Display for Buzzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.output.sensor(), f)
    }
}
