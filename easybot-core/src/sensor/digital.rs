//! Digital read policy
//!
//! The board's digital read primitive fails now and then because of
//! timing inside the driver firmware. Reads are retried in a tight loop
//! with no delay between attempts, bounded by a failure budget.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use easybot_hal::{DriverError, PinDriver};

use super::Sensor;
use crate::sentinel::READ_FAILED;

/// Default number of tolerated read failures
pub const DEFAULT_MAX_FAILURES: u8 = 10;

/// Bounded busy-retry policy for digital reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct DigitalReadPolicy {
    /// Failures tolerated before giving up
    ///
    /// The read gives up only once the failure count exceeds this value,
    /// so a permanently failing pin is attempted `max_failures + 1` times.
    pub max_failures: u8,
}

impl Default for DigitalReadPolicy {
    fn default() -> Self {
        Self {
            max_failures: DEFAULT_MAX_FAILURES,
        }
    }
}

impl DigitalReadPolicy {
    /// Create a policy with a custom failure budget
    pub const fn new(max_failures: u8) -> Self {
        Self { max_failures }
    }

    /// Run `attempt` until it succeeds or the budget is spent
    ///
    /// The first success wins and is coerced to 0 or 1. Returns
    /// [`READ_FAILED`] once the failure count exceeds `max_failures`.
    pub fn attempt<F>(&self, mut attempt: F) -> i32
    where
        F: FnMut() -> Result<i32, DriverError>,
    {
        let mut failures: u16 = 0;
        loop {
            match attempt() {
                Ok(level) => return i32::from(level != 0),
                Err(_e) => {
                    failures += 1;
                    if failures > u16::from(self.max_failures) {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("digital read gave up after {} failures: {}", failures, _e);
                        return READ_FAILED;
                    }
                }
            }
        }
    }

    /// Read a digital sensor under this policy
    pub fn read<D: PinDriver + ?Sized>(&self, sensor: &Sensor, driver: &mut D) -> i32 {
        let pin = sensor.pin();
        self.attempt(|| driver.digital_read(pin))
    }
}

/// Read a digital sensor: 0, 1, or [`READ_FAILED`]
pub fn read<D: PinDriver + ?Sized>(
    sensor: &Sensor,
    driver: &mut D,
    policy: &DigitalReadPolicy,
) -> i32 {
    policy.read(sensor, driver)
}

/// Drive a digital sensor's pin
pub fn write<D: PinDriver + ?Sized>(
    sensor: &Sensor,
    driver: &mut D,
    high: bool,
) -> Result<(), DriverError> {
    driver.digital_write(sensor.pin(), high)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortRegistry;
    use crate::sensor::{Capability, PinMode};
    use easybot_hal::mock::MockBoard;
    use proptest::prelude::*;

    fn button(board: &mut MockBoard) -> Sensor {
        Sensor::new(
            &PortRegistry::gopigo(),
            "D11",
            PinMode::Input,
            Capability::Digital,
            "Button sensor",
            board,
        )
        .unwrap()
    }

    #[test]
    fn test_always_failing_returns_sentinel() {
        let mut board = MockBoard::new();
        board.digital_fallback(Err(DriverError::Timeout));
        let sensor = button(&mut board);

        let value = read(&sensor, &mut board, &DigitalReadPolicy::default());

        assert_eq!(value, READ_FAILED);
        assert_eq!(board.digital_reads, 11);
    }

    #[test]
    fn test_first_success_wins() {
        let mut board = MockBoard::new();
        board
            .script_digital(&[Err(DriverError::Bus), Err(DriverError::Bus), Ok(1)])
            .digital_fallback(Ok(0));
        let sensor = button(&mut board);

        let value = read(&sensor, &mut board, &DigitalReadPolicy::default());

        assert_eq!(value, 1);
        assert_eq!(board.digital_reads, 3);
    }

    #[test]
    fn test_ten_failures_still_read() {
        // The budget is exceeded only by the 11th failure
        let mut board = MockBoard::new();
        board
            .script_digital(&[Err(DriverError::Timeout); 10])
            .digital_fallback(Ok(1));
        let sensor = button(&mut board);

        let value = read(&sensor, &mut board, &DigitalReadPolicy::default());

        assert_eq!(value, 1);
        assert_eq!(board.digital_reads, 11);
    }

    #[test]
    fn test_coerces_to_binary() {
        let policy = DigitalReadPolicy::default();
        assert_eq!(policy.attempt(|| Ok(0)), 0);
        assert_eq!(policy.attempt(|| Ok(1)), 1);
        assert_eq!(policy.attempt(|| Ok(255)), 1);
    }

    #[test]
    fn test_custom_budget() {
        let policy = DigitalReadPolicy::new(2);
        let mut attempts = 0;
        let value = policy.attempt(|| {
            attempts += 1;
            Err(DriverError::Bus)
        });
        assert_eq!(value, READ_FAILED);
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_write_passes_through() {
        let mut board = MockBoard::new();
        let sensor = button(&mut board);

        write(&sensor, &mut board, true).unwrap();
        board.write_result(Err(DriverError::Bus));
        assert_eq!(write(&sensor, &mut board, false), Err(DriverError::Bus));

        assert_eq!(board.digital_writes.as_slice(), &[(10, true), (10, false)]);
    }

    proptest! {
        #[test]
        fn prop_success_within_budget(failures in 0usize..=10, level in 0i32..2) {
            let policy = DigitalReadPolicy::default();
            let mut attempts = 0usize;
            let value = policy.attempt(|| {
                attempts += 1;
                if attempts <= failures { Err(DriverError::Timeout) } else { Ok(level) }
            });
            prop_assert_eq!(value, level);
            prop_assert_eq!(attempts, failures + 1);
        }

        #[test]
        fn prop_never_exceeds_budget(budget in 0u8..20) {
            let policy = DigitalReadPolicy::new(budget);
            let mut attempts = 0usize;
            let value = policy.attempt(|| {
                attempts += 1;
                Err(DriverError::Bus)
            });
            prop_assert_eq!(value, READ_FAILED);
            prop_assert_eq!(attempts, budget as usize + 1);
        }
    }
}
