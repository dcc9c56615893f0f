//! Scripted mock drivers for host-side testing
//!
//! Each mock replays a queue of scripted responses and falls back to a
//! fixed response once the queue is drained. Every call is recorded so
//! tests can assert on attempt counts and written values.

use heapless::{Deque, Vec};

use crate::{
    AnalogDriver, DriverError, IrReceiver, LineArray, PinDirection, PinDriver, RangingDriver,
    LINE_ARRAY_LEN,
};

/// Maximum scripted responses and recorded calls per channel
pub const MOCK_DEPTH: usize = 32;

fn script<T: Copy, const N: usize>(queue: &mut Deque<T, N>, values: &[T]) {
    for &value in values {
        assert!(queue.push_back(value).is_ok(), "mock script exceeds {} entries", N);
    }
}

fn record<T, const N: usize>(log: &mut Vec<T, N>, call: T) {
    assert!(log.push(call).is_ok(), "mock call log exceeds {} entries", N);
}

/// Mock controller board
#[derive(Debug)]
pub struct MockBoard {
    digital: Deque<Result<i32, DriverError>, MOCK_DEPTH>,
    digital_fallback: Result<i32, DriverError>,
    analog: Deque<i32, MOCK_DEPTH>,
    analog_fallback: i32,
    distance: Deque<i32, MOCK_DEPTH>,
    distance_fallback: i32,
    corrected: Deque<i32, MOCK_DEPTH>,
    corrected_fallback: i32,
    write_result: Result<(), DriverError>,
    /// Pins configured, in call order
    pub configured: Vec<(u8, PinDirection), MOCK_DEPTH>,
    /// Digital writes, in call order
    pub digital_writes: Vec<(u8, bool), MOCK_DEPTH>,
    /// Analog writes, in call order
    pub analog_writes: Vec<(u8, i32), MOCK_DEPTH>,
    /// Number of `digital_read` calls
    pub digital_reads: usize,
    /// Number of `analog_read` calls
    pub analog_reads: usize,
    /// Number of `distance` calls
    pub distance_reads: usize,
    /// Number of `corrected_distance` calls
    pub corrected_reads: usize,
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBoard {
    /// Create a board that reads zero everywhere and accepts every write
    pub fn new() -> Self {
        Self {
            digital: Deque::new(),
            digital_fallback: Ok(0),
            analog: Deque::new(),
            analog_fallback: 0,
            distance: Deque::new(),
            distance_fallback: 0,
            corrected: Deque::new(),
            corrected_fallback: 0,
            write_result: Ok(()),
            configured: Vec::new(),
            digital_writes: Vec::new(),
            analog_writes: Vec::new(),
            digital_reads: 0,
            analog_reads: 0,
            distance_reads: 0,
            corrected_reads: 0,
        }
    }

    /// Queue digital read results
    pub fn script_digital(&mut self, results: &[Result<i32, DriverError>]) -> &mut Self {
        script(&mut self.digital, results);
        self
    }

    /// Result returned once the digital script is drained
    pub fn digital_fallback(&mut self, result: Result<i32, DriverError>) -> &mut Self {
        self.digital_fallback = result;
        self
    }

    /// Queue analog samples
    pub fn script_analog(&mut self, samples: &[i32]) -> &mut Self {
        script(&mut self.analog, samples);
        self
    }

    /// Sample returned once the analog script is drained
    pub fn analog_fallback(&mut self, sample: i32) -> &mut Self {
        self.analog_fallback = sample;
        self
    }

    /// Queue raw echo distances
    pub fn script_distance(&mut self, samples: &[i32]) -> &mut Self {
        script(&mut self.distance, samples);
        self
    }

    /// Raw distance returned once the script is drained
    pub fn distance_fallback(&mut self, sample: i32) -> &mut Self {
        self.distance_fallback = sample;
        self
    }

    /// Queue corrected echo distances
    pub fn script_corrected(&mut self, samples: &[i32]) -> &mut Self {
        script(&mut self.corrected, samples);
        self
    }

    /// Corrected distance returned once the script is drained
    pub fn corrected_fallback(&mut self, sample: i32) -> &mut Self {
        self.corrected_fallback = sample;
        self
    }

    /// Result returned by every digital and analog write
    pub fn write_result(&mut self, result: Result<(), DriverError>) -> &mut Self {
        self.write_result = result;
        self
    }
}

impl PinDriver for MockBoard {
    fn configure_pin(&mut self, pin: u8, direction: PinDirection) {
        record(&mut self.configured, (pin, direction));
    }

    fn digital_read(&mut self, _pin: u8) -> Result<i32, DriverError> {
        self.digital_reads += 1;
        self.digital.pop_front().unwrap_or(self.digital_fallback)
    }

    fn digital_write(&mut self, pin: u8, high: bool) -> Result<(), DriverError> {
        record(&mut self.digital_writes, (pin, high));
        self.write_result
    }
}

impl AnalogDriver for MockBoard {
    fn analog_read(&mut self, _pin: u8) -> i32 {
        self.analog_reads += 1;
        self.analog.pop_front().unwrap_or(self.analog_fallback)
    }

    fn analog_write(&mut self, pin: u8, value: i32) -> Result<(), DriverError> {
        record(&mut self.analog_writes, (pin, value));
        self.write_result
    }
}

impl RangingDriver for MockBoard {
    fn distance(&mut self, _pin: u8) -> i32 {
        self.distance_reads += 1;
        self.distance.pop_front().unwrap_or(self.distance_fallback)
    }

    fn corrected_distance(&mut self, _pin: u8) -> i32 {
        self.corrected_reads += 1;
        self.corrected.pop_front().unwrap_or(self.corrected_fallback)
    }
}

type LineFrame = Result<[i32; LINE_ARRAY_LEN], DriverError>;

/// Mock line follower module
#[derive(Debug)]
pub struct MockLineArray {
    raw: LineFrame,
    normalized: LineFrame,
    /// Number of reads of either kind
    pub reads: usize,
}

impl MockLineArray {
    /// Create a module returning fixed raw and calibrated frames
    pub fn new(raw: LineFrame, normalized: LineFrame) -> Self {
        Self {
            raw,
            normalized,
            reads: 0,
        }
    }

    /// Create a module whose calibrated frame is `pattern`
    pub fn seeing(pattern: [i32; LINE_ARRAY_LEN]) -> Self {
        Self::new(Ok(pattern.map(|bit| bit * 1023)), Ok(pattern))
    }

    /// Create a module whose reads always fail
    pub fn failing(err: DriverError) -> Self {
        Self::new(Err(err), Err(err))
    }

    /// Replace the calibrated frame
    pub fn set_pattern(&mut self, pattern: [i32; LINE_ARRAY_LEN]) {
        self.normalized = Ok(pattern);
    }
}

impl LineArray for MockLineArray {
    fn read_raw(&mut self) -> LineFrame {
        self.reads += 1;
        self.raw
    }

    fn read_normalized(&mut self) -> LineFrame {
        self.reads += 1;
        self.normalized
    }
}

/// Mock IR receiver
#[derive(Debug)]
pub struct MockIrReceiver {
    enabled: bool,
    codes: Deque<i32, MOCK_DEPTH>,
    /// Number of `next_code` calls
    pub polls: usize,
}

impl MockIrReceiver {
    /// Create a receiver reporting `enabled` from its check
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            codes: Deque::new(),
            polls: 0,
        }
    }

    /// Queue decoded key codes
    pub fn script_codes(&mut self, codes: &[i32]) -> &mut Self {
        script(&mut self.codes, codes);
        self
    }
}

impl IrReceiver for MockIrReceiver {
    fn check(&mut self) -> bool {
        self.enabled
    }

    fn next_code(&mut self) -> i32 {
        self.polls += 1;
        self.codes.pop_front().unwrap_or(-1)
    }
}
