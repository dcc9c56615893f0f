//! I2C line sensor abstractions
//!
//! The line follower is a self-contained I2C module with its own
//! calibration store. The core only consumes its two sampling modes.

use crate::DriverError;

/// Number of reflectance elements on the line array
pub const LINE_ARRAY_LEN: usize = 5;

/// Five element reflectance array
pub trait LineArray {
    /// Read raw reflectance values (0-1023), leftmost element first
    fn read_raw(&mut self) -> Result<[i32; LINE_ARRAY_LEN], DriverError>;

    /// Read calibrated values, 1 where the element sees the line
    ///
    /// Depends on the module having been calibrated with the line sensor
    /// calibration tool.
    fn read_normalized(&mut self) -> Result<[i32; LINE_ARRAY_LEN], DriverError>;
}
