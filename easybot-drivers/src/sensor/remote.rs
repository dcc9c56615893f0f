//! IR remote control
//!
//! Passthrough to the IR decoder on the serial port. The receiver must be
//! enabled in the board's comms setup; when it is not, the remote is
//! still constructed but reports itself disabled and returns -1.

use core::fmt;

use easybot_core::config::{BoardConfig, ConfigError};
use easybot_core::sensor::Sensor;
use easybot_core::sentinel::READ_FAILED;
use easybot_hal::IrReceiver;

use crate::device::DeviceKind;

/// IR remote receiver
#[derive(Debug)]
pub struct Remote<R> {
    sensor: Sensor,
    receiver: R,
    enabled: bool,
}

impl<R: IrReceiver> Remote<R> {
    /// Bind to the default port
    ///
    /// Fails with [`ConfigError::ModuleUnavailable`] when no receiver
    /// is installed.
    pub fn new(config: &BoardConfig, receiver: Option<R>) -> Result<Self, ConfigError> {
        Self::on_port(config, DeviceKind::Remote.default_port(), receiver)
    }

    /// Bind to `port`
    pub fn on_port(
        config: &BoardConfig,
        port: &str,
        receiver: Option<R>,
    ) -> Result<Self, ConfigError> {
        let Some(mut receiver) = receiver else {
            #[cfg(feature = "defmt")]
            defmt::warn!("IR receiver module not installed");
            return Err(ConfigError::ModuleUnavailable);
        };
        let sensor = DeviceKind::Remote.bind_bus(config, port)?;

        let enabled = receiver.check();
        #[cfg(feature = "defmt")]
        if !enabled {
            defmt::warn!("IR receiver disabled, enable it in the Advanced Comms tool");
        }

        Ok(Self {
            sensor,
            receiver,
            enabled,
        })
    }

    /// Next key code without preprocessing, -1 when none or disabled
    pub fn next_code(&mut self) -> i32 {
        if self.enabled {
            self.receiver.next_code()
        } else {
            READ_FAILED
        }
    }
}

impl<R> Remote<R> {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn sensor(&self) -> &Sensor {
        &self.sensor
    }
}

impl<R> fmt::Display for Remote<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.sensor, f)
    }
}
