//! Analog input and PWM output

use crate::DriverError;

/// Analog sampling and PWM output
///
/// Values are in the driver's native range (10-bit samples on read,
/// nominally 0-254 duty on write). No scaling happens at this layer.
pub trait AnalogDriver {
    /// Sample an analog pin
    fn analog_read(&mut self, pin: u8) -> i32;

    /// Write a PWM duty value to a pin
    fn analog_write(&mut self, pin: u8, value: i32) -> Result<(), DriverError>;
}
