//! Sensor capability model
//!
//! Every transducer on the board is a [`Sensor`] record: the port it is
//! bound to, how its pin was configured, its capability class and a
//! display descriptor. Read and write logic lives in free functions
//! dispatched on the capability tag rather than on the device kind.

pub mod analog;
pub mod digital;

use core::fmt;

use easybot_hal::{Board, DriverError, PinDirection, PinDriver};

use crate::config::{ConfigError, PinClass, PortEntry, PortRegistry};
use crate::sentinel::READ_FAILED;

pub use digital::DigitalReadPolicy;

/// How a sensor's pin is configured at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    Input,
    Output,
    /// Pin configuration is skipped; serial and I2C modules configure themselves
    SerialIgnored,
}

impl PinMode {
    /// Driver direction, or None when configuration is skipped
    pub const fn direction(&self) -> Option<PinDirection> {
        match self {
            PinMode::Input => Some(PinDirection::Input),
            PinMode::Output => Some(PinDirection::Output),
            PinMode::SerialIgnored => None,
        }
    }
}

/// Capability class of a sensor
///
/// Independent of the port's [`PinClass`]: a buzzer sits on a digital
/// port but is driven through the analog (PWM) primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Capability {
    Analog,
    Digital,
    /// Module on a serial or I2C bus with no single scalar value
    Bus,
}

/// A transducer bound to a port
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sensor {
    port: PortEntry,
    mode: PinMode,
    capability: Capability,
    descriptor: &'static str,
    /// Last sample read or value written (analog sensors only)
    last_value: i32,
}

impl Sensor {
    /// Bind a sensor to a port
    ///
    /// Configures the pin through the driver exactly once when `mode` is
    /// Input or Output. Fails with [`ConfigError::UnknownPort`] if the port
    /// is not registered, and with [`ConfigError::PortClassMismatch`] if an
    /// Input or Output pin is bound to a bus port or a bus module to a pin
    /// port. Nothing is configured on failure.
    pub fn new<D: PinDriver + ?Sized>(
        registry: &PortRegistry,
        port: &str,
        mode: PinMode,
        capability: Capability,
        descriptor: &'static str,
        driver: &mut D,
    ) -> Result<Self, ConfigError> {
        let port = resolve_class(registry, port, mode.direction().is_none())?;
        if let Some(direction) = mode.direction() {
            driver.configure_pin(port.pin, direction);
        }

        Ok(Self {
            port,
            mode,
            capability,
            descriptor,
            last_value: 0,
        })
    }

    /// Bind a bus module (line follower, IR receiver) to a port
    ///
    /// No driver call is made. Fails with [`ConfigError::PortClassMismatch`]
    /// unless the port is a serial or I2C port.
    pub fn on_bus(
        registry: &PortRegistry,
        port: &str,
        descriptor: &'static str,
    ) -> Result<Self, ConfigError> {
        let port = resolve_class(registry, port, true)?;
        Ok(Self {
            port,
            mode: PinMode::SerialIgnored,
            capability: Capability::Bus,
            descriptor,
            last_value: 0,
        })
    }

    /// Port name
    pub fn port(&self) -> &str {
        self.port.name()
    }

    /// Driver pin identifier
    pub fn pin(&self) -> u8 {
        self.port.pin
    }

    /// Class of the port the sensor is bound to
    pub fn pin_class(&self) -> PinClass {
        self.port.class
    }

    pub fn pin_mode(&self) -> PinMode {
        self.mode
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn is_analog(&self) -> bool {
        self.capability == Capability::Analog
    }

    pub fn is_digital(&self) -> bool {
        self.capability == Capability::Digital
    }

    pub fn descriptor(&self) -> &'static str {
        self.descriptor
    }

    pub fn set_descriptor(&mut self, descriptor: &'static str) {
        self.descriptor = descriptor;
    }

    /// Last sample read or value written
    pub fn last_value(&self) -> i32 {
        self.last_value
    }

    pub(crate) fn record(&mut self, value: i32) {
        self.last_value = value;
    }
}

/// Resolve `name`, requiring a bus port iff `bus` is set
fn resolve_class(
    registry: &PortRegistry,
    name: &str,
    bus: bool,
) -> Result<PortEntry, ConfigError> {
    let entry = registry.resolve(name)?;
    if entry.class.is_bus() != bus {
        #[cfg(feature = "defmt")]
        defmt::warn!("port {} is {}, cannot bind here", name, entry.class);
        return Err(ConfigError::PortClassMismatch);
    }
    Ok(entry.clone())
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on port {}", self.descriptor, self.port.name())
    }
}

/// Read a sensor through the primitive matching its capability
///
/// Bus modules have no scalar value and read as [`READ_FAILED`].
pub fn read<B: Board + ?Sized>(
    sensor: &mut Sensor,
    board: &mut B,
    policy: &DigitalReadPolicy,
) -> i32 {
    match sensor.capability {
        Capability::Analog => analog::read(sensor, board),
        Capability::Digital => policy.read(sensor, board),
        Capability::Bus => READ_FAILED,
    }
}

/// Write a sensor through the primitive matching its capability
///
/// Digital sensors treat any non-zero value as high.
pub fn write<B: Board + ?Sized>(
    sensor: &mut Sensor,
    board: &mut B,
    value: i32,
) -> Result<(), DriverError> {
    match sensor.capability {
        Capability::Analog => analog::write(sensor, board, value),
        Capability::Digital => digital::write(sensor, board, value != 0),
        Capability::Bus => Err(DriverError::Unsupported),
    }
}
