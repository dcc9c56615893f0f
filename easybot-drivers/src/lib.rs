//! Device implementations
//!
//! This crate provides the concrete transducers found on the robot,
//! built on the capability model in easybot-core:
//!
//! - Analog inputs (light, sound)
//! - Digital inputs (button, motion)
//! - Ultrasonic rangefinder
//! - PWM actuators (buzzer, LED)
//! - Bus modules (line follower, IR remote)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod actuator;
pub mod device;
pub mod sensor;

pub use actuator::{Buzzer, Led};
pub use device::{Device, DeviceKind, Reading};
pub use sensor::{
    ButtonSensor, LightSensor, LineFollower, MotionSensor, Remote, SoundSensor, UltrasonicSensor,
};
