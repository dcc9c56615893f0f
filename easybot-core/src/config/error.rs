//! Configuration errors

use core::fmt;

/// Errors raised while building the board configuration or binding a
/// sensor to a port
///
/// These are fatal at construction and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Port name is not in the registry
    UnknownPort,
    /// Port name registered twice
    DuplicatePort,
    /// Registry is full
    TooManyPorts,
    /// Port name exceeds the label capacity
    NameTooLong,
    /// Optional hardware module (line follower, IR receiver) is not installed
    ModuleUnavailable,
    /// Port class does not match the pin mode (bare pin on a bus port or
    /// bus module on a pin port)
    PortClassMismatch,
    /// Read policy values are unusable
    InvalidPolicy,
    /// Configuration could not be encoded into the buffer
    Encode,
    /// Stored or written configuration could not be decoded
    Decode,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::UnknownPort => "unknown port",
            ConfigError::DuplicatePort => "duplicate port",
            ConfigError::TooManyPorts => "too many ports",
            ConfigError::NameTooLong => "port name too long",
            ConfigError::ModuleUnavailable => "hardware module not available",
            ConfigError::PortClassMismatch => "port class does not match pin mode",
            ConfigError::InvalidPolicy => "invalid read policy",
            ConfigError::Encode => "configuration encode failed",
            ConfigError::Decode => "configuration decode failed",
        };
        f.write_str(msg)
    }
}
