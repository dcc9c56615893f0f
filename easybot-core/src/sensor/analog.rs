//! Analog read/write path
//!
//! Direct passthrough to the driver with value bookkeeping. No retry,
//! filtering or validation happens here.

use easybot_hal::{AnalogDriver, DriverError};

use super::Sensor;

/// Sample an analog sensor and record the sample
pub fn read<D: AnalogDriver + ?Sized>(sensor: &mut Sensor, driver: &mut D) -> i32 {
    let value = driver.analog_read(sensor.pin());
    sensor.record(value);
    value
}

/// Write `value` unmodified and record it as the last value
pub fn write<D: AnalogDriver + ?Sized>(
    sensor: &mut Sensor,
    driver: &mut D,
    value: i32,
) -> Result<(), DriverError> {
    sensor.record(value);
    driver.analog_write(sensor.pin(), value)
}
