//! Device kinds
//!
//! The closed set of transducers the robot supports. Each kind fixes the
//! default port, pin mode, capability and descriptor used when binding it.

use core::fmt;

use easybot_core::config::{BoardConfig, ConfigError};
use easybot_core::sensor::{Capability, PinMode, Sensor};
use easybot_hal::{Board, IrReceiver, LineArray, PinDriver, LINE_ARRAY_LEN};

use crate::actuator::{Buzzer, Led};
use crate::sensor::{
    ButtonSensor, LightSensor, LineFollower, MotionSensor, Remote, SoundSensor, UltrasonicSensor,
};

/// Kind of transducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceKind {
    Light,
    Sound,
    Ultrasonic,
    Button,
    Motion,
    Buzzer,
    Led,
    LineFollower,
    Remote,
}

impl DeviceKind {
    /// Port the device is wired to on a stock board
    pub const fn default_port(&self) -> &'static str {
        match self {
            DeviceKind::Light | DeviceKind::Sound | DeviceKind::Ultrasonic => "A1",
            DeviceKind::Button | DeviceKind::Motion | DeviceKind::Buzzer | DeviceKind::Led => "D11",
            DeviceKind::LineFollower => "I2C",
            DeviceKind::Remote => "SERIAL",
        }
    }

    pub const fn descriptor(&self) -> &'static str {
        match self {
            DeviceKind::Light => "Light sensor",
            DeviceKind::Sound => "Sound sensor",
            DeviceKind::Ultrasonic => "Ultrasonic sensor",
            DeviceKind::Button => "Button sensor",
            DeviceKind::Motion => "Motion Sensor",
            DeviceKind::Buzzer => "Buzzer",
            DeviceKind::Led => "LED",
            DeviceKind::LineFollower => "Line Follower",
            DeviceKind::Remote => "Remote Control",
        }
    }

    pub const fn capability(&self) -> Capability {
        match self {
            DeviceKind::Light
            | DeviceKind::Sound
            | DeviceKind::Ultrasonic
            | DeviceKind::Buzzer
            | DeviceKind::Led => Capability::Analog,
            DeviceKind::Button | DeviceKind::Motion => Capability::Digital,
            DeviceKind::LineFollower | DeviceKind::Remote => Capability::Bus,
        }
    }

    pub const fn pin_mode(&self) -> PinMode {
        match self {
            DeviceKind::Buzzer | DeviceKind::Led => PinMode::Output,
            DeviceKind::LineFollower | DeviceKind::Remote => PinMode::SerialIgnored,
            _ => PinMode::Input,
        }
    }

    /// Bind a sensor of this kind to `port`
    pub(crate) fn bind<D: PinDriver + ?Sized>(
        &self,
        config: &BoardConfig,
        port: &str,
        driver: &mut D,
    ) -> Result<Sensor, ConfigError> {
        Sensor::new(
            &config.ports,
            port,
            self.pin_mode(),
            self.capability(),
            self.descriptor(),
            driver,
        )
    }

    /// Bind a bus module of this kind to `port`
    pub(crate) fn bind_bus(&self, config: &BoardConfig, port: &str) -> Result<Sensor, ConfigError> {
        Sensor::on_bus(&config.ports, port, self.descriptor())
    }
}

/// Value read from a device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reading {
    /// Scalar sample, possibly a sentinel
    Level(i32),
    /// Calibrated line array frame
    Line([i32; LINE_ARRAY_LEN]),
    /// IR key code, -1 when none
    Code(i32),
    /// Output-only actuator
    WriteOnly,
}

/// Any supported device
#[derive(Debug)]
pub enum Device<L, R> {
    Light(LightSensor),
    Sound(SoundSensor),
    Ultrasonic(UltrasonicSensor),
    Button(ButtonSensor),
    Motion(MotionSensor),
    Buzzer(Buzzer),
    Led(Led),
    LineFollower(LineFollower<L>),
    Remote(Remote<R>),
}

impl<L, R> Device<L, R> {
    pub fn kind(&self) -> DeviceKind {
        match self {
            Device::Light(_) => DeviceKind::Light,
            Device::Sound(_) => DeviceKind::Sound,
            Device::Ultrasonic(_) => DeviceKind::Ultrasonic,
            Device::Button(_) => DeviceKind::Button,
            Device::Motion(_) => DeviceKind::Motion,
            Device::Buzzer(_) => DeviceKind::Buzzer,
            Device::Led(_) => DeviceKind::Led,
            Device::LineFollower(_) => DeviceKind::LineFollower,
            Device::Remote(_) => DeviceKind::Remote,
        }
    }

    /// Shared sensor record
    pub fn sensor(&self) -> &Sensor {
        match self {
            Device::Light(d) => d.sensor(),
            Device::Sound(d) => d.sensor(),
            Device::Ultrasonic(d) => d.sensor(),
            Device::Button(d) => d.sensor(),
            Device::Motion(d) => d.sensor(),
            Device::Buzzer(d) => d.sensor(),
            Device::Led(d) => d.sensor(),
            Device::LineFollower(d) => d.sensor(),
            Device::Remote(d) => d.sensor(),
        }
    }
}

impl<L: LineArray, R: IrReceiver> Device<L, R> {
    /// Read the device's natural value
    ///
    /// Ultrasonic sensors return the filtered distance and line followers
    /// the calibrated frame. Actuators are not readable.
    pub fn read<B: Board + ?Sized>(&mut self, board: &mut B) -> Reading {
        match self {
            Device::Light(d) => Reading::Level(d.read(board)),
            Device::Sound(d) => Reading::Level(d.read(board)),
            Device::Ultrasonic(d) => Reading::Level(d.read(board)),
            Device::Button(d) => Reading::Level(d.read(board)),
            Device::Motion(d) => Reading::Level(d.read(board)),
            Device::Buzzer(_) | Device::Led(_) => Reading::WriteOnly,
            Device::LineFollower(d) => Reading::Line(d.read()),
            Device::Remote(d) => Reading::Code(d.next_code()),
        }
    }
}

impl<L, R> fmt::Display for Device<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.sensor(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easybot_hal::mock::{MockBoard, MockIrReceiver, MockLineArray};
    use std::string::ToString;
    use std::vec::Vec;

    type TestDevice = Device<MockLineArray, MockIrReceiver>;

    #[test]
    fn test_defaults_match_board() {
        let config = BoardConfig::gopigo();
        for kind in [
            DeviceKind::Light,
            DeviceKind::Sound,
            DeviceKind::Ultrasonic,
            DeviceKind::Button,
            DeviceKind::Motion,
            DeviceKind::Buzzer,
            DeviceKind::Led,
            DeviceKind::LineFollower,
            DeviceKind::Remote,
        ] {
            assert!(config.ports.contains(kind.default_port()));
        }
    }

    #[test]
    fn test_bus_kinds_skip_configuration() {
        assert_eq!(DeviceKind::LineFollower.pin_mode(), PinMode::SerialIgnored);
        assert_eq!(DeviceKind::Remote.capability(), Capability::Bus);
        assert_eq!(DeviceKind::Buzzer.pin_mode(), PinMode::Output);
        assert_eq!(DeviceKind::Buzzer.capability(), Capability::Analog);
    }

    #[test]
    fn test_read_dispatch() {
        let config = BoardConfig::gopigo();
        let mut board = MockBoard::new();
        board
            .script_analog(&[640])
            .script_digital(&[Ok(1)])
            .script_corrected(&[100, 200, 300]);

        let mut devices: Vec<TestDevice> = Vec::new();
        devices.push(Device::Light(LightSensor::new(&config, &mut board).unwrap()));
        devices.push(Device::Button(ButtonSensor::new(&config, &mut board).unwrap()));
        devices.push(Device::Ultrasonic(
            UltrasonicSensor::new(&config, &mut board).unwrap(),
        ));
        devices.push(Device::Buzzer(Buzzer::new(&config, &mut board).unwrap()));
        devices.push(Device::LineFollower(
            LineFollower::new(&config, Some(MockLineArray::seeing([0, 1, 1, 1, 0]))).unwrap(),
        ));
        let mut ir = MockIrReceiver::new(true);
        ir.script_codes(&[12]);
        devices.push(Device::Remote(Remote::new(&config, Some(ir)).unwrap()));

        let readings: Vec<Reading> = devices.iter_mut().map(|d| d.read(&mut board)).collect();
        assert_eq!(
            readings,
            [
                Reading::Level(640),
                Reading::Level(1),
                Reading::Level(200),
                Reading::WriteOnly,
                Reading::Line([0, 1, 1, 1, 0]),
                Reading::Code(12),
            ]
        );
    }

    #[test]
    fn test_display_and_kind() {
        let config = BoardConfig::gopigo();
        let mut board = MockBoard::new();
        let device: TestDevice = Device::Led(Led::new(&config, &mut board).unwrap());

        assert_eq!(device.kind(), DeviceKind::Led);
        assert_eq!(device.to_string(), "LED on port D11");
    }

    #[test]
    fn test_debug_output() {
        let config = BoardConfig::gopigo();
        let device: TestDevice = Device::LineFollower(
            LineFollower::new(&config, Some(MockLineArray::seeing([0; 5]))).unwrap(),
        );

        let debug = std::format!("{:?}", device);
        assert!(debug.starts_with("LineFollower("));
        assert!(debug.contains("Line Follower"));
    }
}
