//! GPIO pin abstractions
//!
//! Pins are addressed by the board driver's numeric pin identifier rather
//! than owned pin objects: the controller board multiplexes every port
//! through a single firmware interface.

use crate::DriverError;

/// Direction a pin is configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    Input,
    Output,
}

/// Pin configuration and digital I/O
pub trait PinDriver {
    /// Configure a pin as input or output
    ///
    /// The outcome is not reported; boards that fail to configure a pin
    /// surface the problem on the next read or write.
    fn configure_pin(&mut self, pin: u8, direction: PinDirection);

    /// Read the raw level of a digital pin
    ///
    /// The board firmware occasionally fails this read due to internal
    /// timing, so callers are expected to retry.
    fn digital_read(&mut self, pin: u8) -> Result<i32, DriverError>;

    /// Drive a digital pin high or low
    fn digital_write(&mut self, pin: u8, high: bool) -> Result<(), DriverError>;
}
