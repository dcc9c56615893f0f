//! Driver failure kinds

use core::fmt;

/// Errors reported by the board driver
///
/// The core never hands these to its callers. They are collapsed into
/// sentinel readings once the retry or sampling budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// Board did not answer in time
    Timeout,
    /// Bus transaction failed
    Bus,
    /// Board answered with data that could not be decoded
    InvalidResponse,
    /// Primitive not supported on this pin or board
    Unsupported,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Timeout => f.write_str("driver timeout"),
            DriverError::Bus => f.write_str("bus error"),
            DriverError::InvalidResponse => f.write_str("invalid driver response"),
            DriverError::Unsupported => f.write_str("unsupported operation"),
        }
    }
}
