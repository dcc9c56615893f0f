//! PWM actuators
//!
//! Both actuators own a [`PwmOutput`](easybot_core::actuator::PwmOutput)
//! and apply the shared power clamp to every requested level.

pub mod buzzer;
pub mod led;

pub use buzzer::Buzzer;
pub use led::Led;
