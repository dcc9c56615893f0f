//! Configuration types
//!
//! The board configuration is built once at startup and passed by
//! reference to everything that resolves ports or reads sensors.

pub mod board;
pub mod error;
pub mod ports;

pub use board::*;
pub use error::ConfigError;
pub use ports::*;
