//! Ultrasonic ranging primitives

/// Ultrasonic rangefinder access
///
/// Both primitives return a distance in millimetres from a single echo.
/// Readings are unreliable close to and beyond the sensor's maximum range,
/// and a missed echo is reported as zero or an oversized value.
pub trait RangingDriver {
    /// Single uncorrected echo distance
    fn distance(&mut self, pin: u8) -> i32;

    /// Single echo distance with the board's offset correction applied
    fn corrected_distance(&mut self, pin: u8) -> i32;
}
