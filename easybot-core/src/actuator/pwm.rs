//! PWM output capability
//!
//! Owned by the buzzer and LED drivers rather than inherited: both are
//! output-only devices that happen to be driven through the analog write
//! primitive.

use easybot_hal::{AnalogDriver, DriverError, PinDriver};

use super::clamp::{clamp_power, PowerRequest, MAX_POWER};
use crate::config::{ConfigError, PortRegistry};
use crate::sensor::{analog, Capability, PinMode, Sensor};

/// PWM-driven output bound to a port
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmOutput {
    sensor: Sensor,
    /// Last clamped power level
    power: i32,
}

impl PwmOutput {
    /// Bind an output to a port, configuring the pin as output
    pub fn new<D: PinDriver + ?Sized>(
        registry: &PortRegistry,
        port: &str,
        descriptor: &'static str,
        driver: &mut D,
    ) -> Result<Self, ConfigError> {
        let sensor = Sensor::new(
            registry,
            port,
            PinMode::Output,
            Capability::Analog,
            descriptor,
            driver,
        )?;
        Ok(Self { sensor, power: 0 })
    }

    /// Set the recorded power without writing it
    pub fn with_power(mut self, power: i32) -> Self {
        self.power = power;
        self
    }

    /// Clamp `requested` and write it
    ///
    /// Non-numeric and negative requests become 0. The power is recorded
    /// even if the driver write fails.
    pub fn set_power<D, P>(&mut self, driver: &mut D, requested: &P) -> Result<(), DriverError>
    where
        D: AnalogDriver + ?Sized,
        P: PowerRequest + ?Sized,
    {
        let power = clamp_power(requested);
        self.apply(driver, power)
    }

    /// Write [`MAX_POWER`]
    pub fn full<D: AnalogDriver + ?Sized>(&mut self, driver: &mut D) -> Result<(), DriverError> {
        self.apply(driver, MAX_POWER)
    }

    /// Write 0
    pub fn off<D: AnalogDriver + ?Sized>(&mut self, driver: &mut D) -> Result<(), DriverError> {
        self.apply(driver, 0)
    }

    fn apply<D: AnalogDriver + ?Sized>(
        &mut self,
        driver: &mut D,
        power: i32,
    ) -> Result<(), DriverError> {
        self.power = power;
        analog::write(&mut self.sensor, driver, power)
    }

    /// Last clamped power level
    pub fn power(&self) -> i32 {
        self.power
    }

    pub fn sensor(&self) -> &Sensor {
        &self.sensor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easybot_hal::mock::MockBoard;
    use easybot_hal::PinDirection;

    fn output(board: &mut MockBoard) -> PwmOutput {
        PwmOutput::new(&PortRegistry::gopigo(), "D11", "Buzzer", board).unwrap()
    }

    #[test]
    fn test_configured_as_output() {
        let mut board = MockBoard::new();
        let pwm = output(&mut board);

        assert_eq!(board.configured.as_slice(), &[(10, PinDirection::Output)]);
        assert!(pwm.sensor().is_analog());
        assert_eq!(pwm.power(), 0);
    }

    #[test]
    fn test_set_power_single_write() {
        let mut board = MockBoard::new();
        let mut pwm = output(&mut board);

        pwm.set_power(&mut board, "120").unwrap();

        assert_eq!(pwm.power(), 120);
        assert_eq!(pwm.sensor().last_value(), 120);
        assert_eq!(board.analog_writes.as_slice(), &[(10, 120)]);
    }

    #[test]
    fn test_invalid_requests_write_zero() {
        let mut board = MockBoard::new();
        let mut pwm = output(&mut board).with_power(MAX_POWER);

        pwm.set_power(&mut board, "-5").unwrap();
        assert_eq!(pwm.power(), 0);
        pwm.set_power(&mut board, "abc").unwrap();
        assert_eq!(pwm.power(), 0);

        assert_eq!(board.analog_writes.as_slice(), &[(10, 0), (10, 0)]);
    }

    #[test]
    fn test_full_and_off() {
        let mut board = MockBoard::new();
        let mut pwm = output(&mut board);

        pwm.full(&mut board).unwrap();
        assert_eq!(pwm.power(), MAX_POWER);
        pwm.off(&mut board).unwrap();
        assert_eq!(pwm.power(), 0);

        assert_eq!(board.analog_writes.as_slice(), &[(10, 254), (10, 0)]);
    }

    #[test]
    fn test_driver_error_is_returned() {
        let mut board = MockBoard::new();
        let mut pwm = output(&mut board);
        board.write_result(Err(DriverError::Timeout));

        assert_eq!(pwm.set_power(&mut board, &80), Err(DriverError::Timeout));
        assert_eq!(pwm.power(), 80);
    }
}
