//! Line position classifier
//!
//! Maps an exact five element pattern from the calibrated line array to
//! where the line sits relative to the robot. Elements are ordered left
//! to right, 1 where the element sees the line.
//!
//! A line seen under the left of the array means the robot has drifted
//! right and should steer left, and vice versa. The classifier only
//! labels; it issues no motor commands. Intersections are not handled.

use core::fmt;

use easybot_hal::LINE_ARRAY_LEN;

/// Where the line is relative to the robot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinePosition {
    /// Line under the middle of the array
    Center,
    /// Every element sees the line
    Black,
    /// No element sees the line
    White,
    /// Line under the left side
    Left,
    /// Line under the right side
    Right,
    /// Pattern not in the table, or a failed read
    Unknown,
}

impl LinePosition {
    /// Display label
    pub const fn as_str(&self) -> &'static str {
        match self {
            LinePosition::Center => "Center",
            LinePosition::Black => "Black",
            LinePosition::White => "White",
            LinePosition::Left => "Left",
            LinePosition::Right => "Right",
            LinePosition::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for LinePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification table: (pattern, position)
const POSITION_TABLE: &[([i32; LINE_ARRAY_LEN], LinePosition)] = &[
    ([0, 0, 1, 0, 0], LinePosition::Center),
    ([0, 1, 1, 1, 0], LinePosition::Center),
    ([1, 1, 1, 1, 1], LinePosition::Black),
    ([0, 0, 0, 0, 0], LinePosition::White),
    ([0, 1, 1, 0, 0], LinePosition::Left),
    ([0, 1, 0, 0, 0], LinePosition::Left),
    ([1, 0, 0, 0, 0], LinePosition::Left),
    ([1, 1, 0, 0, 0], LinePosition::Left),
    ([1, 1, 1, 0, 0], LinePosition::Left),
    ([1, 1, 1, 1, 0], LinePosition::Left),
    ([0, 0, 0, 1, 0], LinePosition::Right),
    ([0, 0, 1, 1, 0], LinePosition::Right),
    ([0, 0, 0, 0, 1], LinePosition::Right),
    ([0, 0, 0, 1, 1], LinePosition::Right),
    ([0, 0, 1, 1, 1], LinePosition::Right),
    ([0, 1, 1, 1, 1], LinePosition::Right),
];

/// Classify a calibrated line array frame
///
/// Only exact table matches are classified. Frames of the wrong length
/// and failed reads (all -1) are [`LinePosition::Unknown`].
pub fn classify(frame: &[i32]) -> LinePosition {
    POSITION_TABLE
        .iter()
        .find(|(pattern, _)| pattern.as_slice() == frame)
        .map(|&(_, position)| position)
        .unwrap_or(LinePosition::Unknown)
}
