//! PWM actuator support
//!
//! Buzzer and LED share one PWM output capability and one clamping rule
//! for requested power.

pub mod clamp;
pub mod pwm;

pub use clamp::{clamp_power, PowerRequest, MAX_POWER};
pub use pwm::PwmOutput;
