//! Signal filters

pub mod ultrasonic;

pub use ultrasonic::UltrasonicFilter;
