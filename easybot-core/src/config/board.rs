//! Board configuration
//!
//! One immutable [`BoardConfig`] is built at startup and passed by
//! reference to every sensor constructor. It can be stored as postcard
//! binary data or written by hand as TOML.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ConfigError, PortEntry, PortRegistry};
use crate::filter::UltrasonicFilter;
use crate::sensor::DigitalReadPolicy;

/// Configuration format version
pub const CONFIG_VERSION: u8 = 1;

/// Default distance below which an obstacle is too close
pub const DEFAULT_SAFE_DISTANCE: i32 = 500;

/// Buffer size sufficient for a postcard-encoded configuration
pub const MAX_CONFIG_BYTES: usize = 256;

fn default_version() -> u8 {
    CONFIG_VERSION
}

fn default_safe_distance() -> i32 {
    DEFAULT_SAFE_DISTANCE
}

/// Complete board configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// Configuration version for compatibility checks
    #[cfg_attr(feature = "serde", serde(default = "default_version"))]
    pub version: u8,
    /// Port name table
    pub ports: PortRegistry,
    /// Retry budget for digital reads
    #[cfg_attr(feature = "serde", serde(default))]
    pub digital: DigitalReadPolicy,
    /// Ultrasonic averaging parameters
    #[cfg_attr(feature = "serde", serde(default))]
    pub ultrasonic: UltrasonicFilter,
    /// Initial safe distance for ultrasonic sensors
    #[cfg_attr(feature = "serde", serde(default = "default_safe_distance"))]
    pub safe_distance: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(PortRegistry::gopigo())
    }
}

impl BoardConfig {
    /// Create a configuration with default policies over `ports`
    pub fn new(ports: PortRegistry) -> Self {
        Self {
            version: default_version(),
            ports,
            digital: DigitalReadPolicy::default(),
            ultrasonic: UltrasonicFilter::default(),
            safe_distance: default_safe_distance(),
        }
    }

    /// Configuration for the stock GoPiGo board
    pub fn gopigo() -> Self {
        Self::default()
    }

    /// Resolve a port name
    pub fn resolve(&self, name: &str) -> Result<&PortEntry, ConfigError> {
        self.ports.resolve(name)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::Decode);
        }
        self.ports.validate()?;
        if self.ultrasonic.samples == 0 || self.ultrasonic.limit <= 1 {
            return Err(ConfigError::InvalidPolicy);
        }
        Ok(())
    }

    /// Encode as postcard into `buf`, returning the used prefix
    #[cfg(feature = "serde")]
    pub fn to_postcard<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Encode)
    }

    /// Decode and validate a postcard-encoded configuration
    #[cfg(feature = "serde")]
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML board file
    ///
    /// ```toml
    /// safe_distance = 300
    ///
    /// [[ports]]
    /// name = "A1"
    /// pin = 15
    /// class = "analog"
    ///
    /// [ultrasonic]
    /// samples = 5
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("TOML parse error: {:?}", defmt::Debug2Format(&_e));
            ConfigError::Decode
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.ports.len(), 4);
        assert_eq!(config.digital.max_failures, 10);
        assert_eq!(config.ultrasonic.samples, 3);
        assert_eq!(config.ultrasonic.max_skips, 5);
        assert_eq!(config.ultrasonic.limit, 501);
        assert_eq!(config.safe_distance, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve() {
        let config = BoardConfig::gopigo();
        assert_eq!(config.resolve("A1").unwrap().pin, 15);
        assert_eq!(config.resolve("B2"), Err(ConfigError::UnknownPort));
    }

    #[test]
    fn test_rejects_unusable_filter() {
        let mut config = BoardConfig::gopigo();
        config.ultrasonic.samples = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidPolicy));

        let mut config = BoardConfig::gopigo();
        config.ultrasonic.limit = 1;
        assert_eq!(config.validate(), Err(ConfigError::InvalidPolicy));
    }

    #[test]
    fn test_rejects_version_mismatch() {
        let mut config = BoardConfig::gopigo();
        config.version = 9;
        assert_eq!(config.validate(), Err(ConfigError::Decode));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_storage() {
        use crate::config::PinClass;

        let mut config = BoardConfig::new(
            PortRegistry::gopigo()
                .with_port("D4", 4, PinClass::Digital)
                .unwrap(),
        );
        config.safe_distance = 250;

        let mut buf = [0u8; MAX_CONFIG_BYTES];
        let used = config.to_postcard(&mut buf).unwrap().len();
        let decoded = BoardConfig::from_postcard(&buf[..used]).unwrap();
        assert_eq!(decoded, config);

        assert_eq!(
            BoardConfig::from_postcard(&buf[..2]),
            Err(ConfigError::Decode)
        );
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_board_file() {
        use crate::config::PinClass;

        let config = BoardConfig::from_toml(
            r#"
            safe_distance = 300

            [[ports]]
            name = "A1"
            pin = 15
            class = "analog"

            [[ports]]
            name = "I2C"
            pin = 0
            class = "i2c"

            [ultrasonic]
            samples = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.safe_distance, 300);
        assert_eq!(config.resolve("I2C").unwrap().class, PinClass::I2c);
        assert_eq!(config.ultrasonic.samples, 5);
        assert_eq!(config.ultrasonic.max_skips, 5);
        assert_eq!(config.digital.max_failures, 10);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_duplicate_port() {
        let result = BoardConfig::from_toml(
            r#"
            [[ports]]
            name = "A1"
            pin = 15
            class = "analog"

            [[ports]]
            name = "A1"
            pin = 16
            class = "analog"
            "#,
        );
        assert_eq!(result, Err(ConfigError::DuplicatePort));
    }
}
