//! Port registry
//!
//! Maps the logical connector names printed on the board ("A1", "D11",
//! "SERIAL", "I2C") to the driver's pin identifiers and pin classes.

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Maximum ports per registry
pub const MAX_PORTS: usize = 8;

/// Maximum port name length
pub const MAX_PORT_NAME_LEN: usize = 8;

/// Electrical class of a port
///
/// Determines which driver primitives are legal on the port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PinClass {
    Analog,
    Digital,
    Serial,
    I2c,
}

impl PinClass {
    /// Serial and I2C ports carry self-configuring modules, not bare pins
    pub const fn is_bus(&self) -> bool {
        matches!(self, PinClass::Serial | PinClass::I2c)
    }
}

/// A single registry entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PortEntry {
    /// Connector name as printed on the board
    pub name: String<MAX_PORT_NAME_LEN>,
    /// Driver pin identifier (unused for bus ports)
    pub pin: u8,
    /// Electrical class
    pub class: PinClass,
}

impl PortEntry {
    /// Create a new entry
    pub fn new(name: &str, pin: u8, class: PinClass) -> Result<Self, ConfigError> {
        let name = String::try_from(name).map_err(|_| ConfigError::NameTooLong)?;
        Ok(Self { name, pin, class })
    }

    /// Connector name
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Ports of a GoPiGo board: (name, pin, class)
const GOPIGO_PORTS: &[(&str, u8, PinClass)] = &[
    ("A1", 15, PinClass::Analog),
    ("D11", 10, PinClass::Digital),
    ("SERIAL", 0, PinClass::Serial),
    ("I2C", 0, PinClass::I2c),
];

/// Immutable lookup table from port name to pin
///
/// Built once at startup. Lookups are read-only and can be shared freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct PortRegistry {
    ports: Vec<PortEntry, MAX_PORTS>,
}

impl PortRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry for the stock GoPiGo board
    pub fn gopigo() -> Self {
        let mut registry = Self::new();
        for &(name, pin, class) in GOPIGO_PORTS {
            let inserted = registry.insert(name, pin, class);
            debug_assert!(inserted.is_ok(), "stock port table exceeds registry limits");
        }
        registry
    }

    /// Register a port
    pub fn insert(&mut self, name: &str, pin: u8, class: PinClass) -> Result<(), ConfigError> {
        if self.contains(name) {
            return Err(ConfigError::DuplicatePort);
        }
        let entry = PortEntry::new(name, pin, class)?;
        self.ports
            .push(entry)
            .map_err(|_| ConfigError::TooManyPorts)
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_port(mut self, name: &str, pin: u8, class: PinClass) -> Result<Self, ConfigError> {
        self.insert(name, pin, class)?;
        Ok(self)
    }

    /// Resolve a port name to its entry
    pub fn resolve(&self, name: &str) -> Result<&PortEntry, ConfigError> {
        match self.ports.iter().find(|p| p.name.as_str() == name) {
            Some(entry) => Ok(entry),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("unknown port {}", name);
                Err(ConfigError::UnknownPort)
            }
        }
    }

    /// Check if a port name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.ports.iter().any(|p| p.name.as_str() == name)
    }

    /// Number of registered ports
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Reject duplicate names
    ///
    /// [`insert`](Self::insert) already enforces this; deserialized tables
    /// bypass it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, entry) in self.ports.iter().enumerate() {
            if self.ports[..i].iter().any(|p| p.name == entry.name) {
                return Err(ConfigError::DuplicatePort);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gopigo_ports() {
        let registry = PortRegistry::gopigo();
        assert_eq!(registry.len(), 4);

        let a1 = registry.resolve("A1").unwrap();
        assert_eq!(a1.pin, 15);
        assert_eq!(a1.class, PinClass::Analog);

        let d11 = registry.resolve("D11").unwrap();
        assert_eq!(d11.pin, 10);
        assert_eq!(d11.class, PinClass::Digital);

        assert_eq!(registry.resolve("SERIAL").unwrap().class, PinClass::Serial);
        assert_eq!(registry.resolve("I2C").unwrap().class, PinClass::I2c);
    }

    #[test]
    fn test_unknown_port() {
        let registry = PortRegistry::gopigo();
        assert_eq!(registry.resolve("D4"), Err(ConfigError::UnknownPort));
        // Lookups are case sensitive
        assert_eq!(registry.resolve("a1"), Err(ConfigError::UnknownPort));
    }

    #[test]
    fn test_duplicate_port() {
        let registry = PortRegistry::new()
            .with_port("A1", 15, PinClass::Analog)
            .unwrap();
        assert_eq!(
            registry.with_port("A1", 16, PinClass::Analog),
            Err(ConfigError::DuplicatePort)
        );
    }

    #[test]
    fn test_capacity_and_name_limits() {
        let mut registry = PortRegistry::new();
        assert_eq!(
            registry.insert("TOOLONGNAME", 1, PinClass::Digital),
            Err(ConfigError::NameTooLong)
        );

        let names = ["P0", "P1", "P2", "P3", "P4", "P5", "P6", "P7"];
        for (pin, name) in names.iter().enumerate() {
            registry.insert(name, pin as u8, PinClass::Digital).unwrap();
        }
        assert_eq!(
            registry.insert("P8", 8, PinClass::Digital),
            Err(ConfigError::TooManyPorts)
        );
    }

    #[test]
    fn test_bus_classes() {
        assert!(PinClass::Serial.is_bus());
        assert!(PinClass::I2c.is_bus());
        assert!(!PinClass::Analog.is_bus());
        assert!(!PinClass::Digital.is_bus());
    }

    #[test]
    fn test_validate() {
        assert!(PortRegistry::gopigo().validate().is_ok());
    }

    #[test]
    fn test_empty_registry() {
        let registry = PortRegistry::new();
        assert!(registry.is_empty());
        assert!(!PortRegistry::gopigo().is_empty());
    }
}
