//! Easybot Hardware Abstraction Layer
//!
//! This crate defines the contract between the sensor layer and the
//! low-level board driver that performs the actual pin I/O. The driver
//! is an external collaborator: these traits describe only what the
//! core consumes from it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  easybot-drivers (device kinds)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  easybot-core (policies, classifiers)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  easybot-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!            board driver firmware
//! ```
//!
//! # Traits
//!
//! - [`gpio::PinDriver`] - Pin configuration and digital I/O
//! - [`analog::AnalogDriver`] - Analog sampling and PWM output
//! - [`ranging::RangingDriver`] - Ultrasonic distance primitives
//! - [`i2c::LineArray`] - Five element reflectance array
//! - [`uart::IrReceiver`] - IR remote decoder

#![no_std]
#![deny(unsafe_code)]

pub mod analog;
pub mod error;
pub mod gpio;
pub mod i2c;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod ranging;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use analog::AnalogDriver;
pub use error::DriverError;
pub use gpio::{PinDirection, PinDriver};
pub use i2c::{LineArray, LINE_ARRAY_LEN};
pub use ranging::RangingDriver;
pub use uart::IrReceiver;

/// Full board driver
///
/// The controller board exposes pin configuration, digital and analog I/O
/// and ultrasonic ranging through one firmware interface.
pub trait Board: PinDriver + AnalogDriver + RangingDriver {}

// Blanket implementation for drivers that implement every primitive
impl<T: PinDriver + AnalogDriver + RangingDriver> Board for T {}
