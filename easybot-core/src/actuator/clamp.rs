//! Actuator power clamping
//!
//! Requested power may arrive as a number or as text from a user-facing
//! surface. Anything that cannot be read as an integer becomes 0, and
//! negative values are raised to 0. There is no upper clamp: callers stay
//! within the driver's PWM range, nominally 0 to [`MAX_POWER`].

/// Conventional full power for PWM actuators
pub const MAX_POWER: i32 = 254;

/// A value that can be coerced to an actuator power level
pub trait PowerRequest {
    /// Integer power, or None when the value is not numeric
    fn to_power(&self) -> Option<i32>;
}

macro_rules! impl_power_request_int {
    ($($t:ty),*) => {
        $(
            impl PowerRequest for $t {
                fn to_power(&self) -> Option<i32> {
                    let wide = i64::from(*self);
                    Some(wide.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
                }
            }
        )*
    };
}

impl_power_request_int!(i8, i16, i32, i64, u8, u16, u32);

impl PowerRequest for bool {
    fn to_power(&self) -> Option<i32> {
        Some(i32::from(*self))
    }
}

impl PowerRequest for f32 {
    fn to_power(&self) -> Option<i32> {
        f64::from(*self).to_power()
    }
}

impl PowerRequest for f64 {
    fn to_power(&self) -> Option<i32> {
        // `as` truncates toward zero and saturates
        self.is_finite().then_some(*self as i32)
    }
}

impl PowerRequest for str {
    fn to_power(&self) -> Option<i32> {
        self.trim().parse().ok()
    }
}

/// Coerce and clamp a requested power level
pub fn clamp_power<P: PowerRequest + ?Sized>(requested: &P) -> i32 {
    match requested.to_power() {
        Some(power) => power.max(0),
        None => {
            #[cfg(feature = "defmt")]
            defmt::debug!("non-numeric power request, using 0");
            0
        }
    }
}
