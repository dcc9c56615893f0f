//! Sensor implementations

pub mod analog;
pub mod digital;
pub mod line_follower;
pub mod remote;
pub mod ultrasonic;

pub use analog::{LightSensor, SoundSensor};
pub use digital::{ButtonSensor, MotionSensor};
pub use line_follower::LineFollower;
pub use remote::Remote;
pub use ultrasonic::UltrasonicSensor;
