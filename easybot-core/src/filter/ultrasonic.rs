//! Ultrasonic outlier-rejecting average
//!
//! Single echoes are noisy near the sensor's maximum range. The filter
//! keeps sampling until it has enough in-range echoes and averages them,
//! while a cap on rejected echoes bounds the worst-case latency.
//!
//! ```text
//!   sample ──► 0 < v < limit ? ──yes──► accumulate ──► enough? ──► mean
//!                   │
//!                   no
//!                   ▼
//!               skip += 1 ──► skip > max_skips ? ──► limit (nothing in range)
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use easybot_hal::RangingDriver;

use crate::sensor::Sensor;
use crate::sentinel::OUT_OF_RANGE;

/// Valid echoes averaged per reading
pub const DEFAULT_SAMPLES: u8 = 3;

/// Rejected echoes tolerated per reading
pub const DEFAULT_MAX_SKIPS: u8 = 5;

/// Ultrasonic averaging filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct UltrasonicFilter {
    /// Valid echoes to average
    pub samples: u8,
    /// Rejected echoes tolerated before giving up
    pub max_skips: u8,
    /// Exclusive upper bound for a valid echo, also the out-of-range result
    pub limit: i32,
}

impl Default for UltrasonicFilter {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            max_skips: DEFAULT_MAX_SKIPS,
            limit: OUT_OF_RANGE,
        }
    }
}

impl UltrasonicFilter {
    /// Check an echo against the valid window `(0, limit)`
    pub fn is_valid(&self, value: i32) -> bool {
        value > 0 && value < self.limit
    }

    /// Average in-range samples drawn from `next`
    ///
    /// Returns the truncated mean of `samples` valid echoes, or `limit`
    /// once more than `max_skips` echoes have been rejected.
    pub fn apply<F: FnMut() -> i32>(&self, mut next: F) -> i32 {
        // A zero sample count would never produce a mean
        let wanted = i64::from(self.samples.max(1));
        let mut collected: i64 = 0;
        let mut sum: i64 = 0;
        let mut skips: u16 = 0;

        while collected < wanted {
            let value = next();
            if self.is_valid(value) {
                sum += i64::from(value);
                collected += 1;
            } else {
                skips += 1;
                if skips > u16::from(self.max_skips) {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("ultrasonic: {} echoes rejected, nothing in range", skips);
                    return self.limit;
                }
            }
        }

        // Valid samples are positive, so division truncates toward zero
        (sum / wanted) as i32
    }

    /// Filtered distance from a sensor's corrected-distance primitive
    pub fn read<D: RangingDriver + ?Sized>(&self, sensor: &Sensor, driver: &mut D) -> i32 {
        let pin = sensor.pin();
        self.apply(|| driver.corrected_distance(pin))
    }
}
