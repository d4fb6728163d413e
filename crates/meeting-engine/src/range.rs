//! Minute-granularity time intervals within a single day.
//!
//! All scheduling math happens in integer minutes from midnight, so a day is
//! the interval `[0, 1440)`. Ranges behave as half-open intervals: a range
//! ending at minute 600 and one starting at minute 600 do not overlap.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// An immutable span of minutes within one day, with `start <= end`.
///
/// Ordering is by `start` ascending, ties broken by `end` ascending, which
/// gives sorted output a deterministic shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    /// First schedulable minute of the day.
    pub const START_OF_DAY: u32 = 0;

    /// One past the last schedulable minute of the day.
    pub const END_OF_DAY: u32 = 24 * 60;

    /// The full schedulable day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: Self::START_OF_DAY,
        end: Self::END_OF_DAY,
    };

    /// Create a range from two instants.
    ///
    /// `end == start` is allowed and yields a zero-duration range; callers
    /// that cannot use one are expected to filter by [`duration`](Self::duration).
    ///
    /// # Errors
    /// Returns [`MeetingError::InvalidRange`] if `end < start`.
    pub fn from_start_end(start: u32, end: u32) -> Result<TimeRange> {
        if end < start {
            return Err(MeetingError::InvalidRange { start, end });
        }
        Ok(TimeRange { start, end })
    }

    /// Create a range from a start instant and a length in minutes.
    pub fn from_start_duration(start: u32, duration: u32) -> TimeRange {
        TimeRange {
            start,
            end: start + duration,
        }
    }

    /// Create a range from two wall-clock times, truncating seconds.
    ///
    /// # Errors
    /// Returns [`MeetingError::InvalidRange`] if `end` reads earlier than
    /// `start`.
    pub fn from_clock(start: NaiveTime, end: NaiveTime) -> Result<TimeRange> {
        Self::from_start_end(
            start.hour() * 60 + start.minute(),
            end.hour() * 60 + end.minute(),
        )
    }

    /// Convert a clock reading to minutes from midnight.
    ///
    /// # Errors
    /// Returns [`MeetingError::InvalidClock`] if `minutes > 59` or the total
    /// lands past the end of the day (anything beyond `24:00`).
    pub fn time_point(hours: u32, minutes: u32) -> Result<u32> {
        if hours > 24 || minutes > 59 || hours * 60 + minutes > Self::END_OF_DAY {
            return Err(MeetingError::InvalidClock { hours, minutes });
        }
        Ok(hours * 60 + minutes)
    }

    /// Start of the range, in minutes from midnight.
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// End of the range (exclusive), in minutes from midnight.
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub const fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Whether two ranges share any point in time.
    ///
    /// Strict on both sides: `self.start < other.end && other.start < self.end`,
    /// so a range ending exactly where another starts does NOT overlap it.
    pub const fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `minute` falls inside the range (half-open membership).
    pub const fn contains_point(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Whether `other` lies entirely inside this range.
    pub const fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The part of this range that lies strictly before `other` begins,
    /// if there is one.
    pub fn before(&self, other: &TimeRange) -> Option<TimeRange> {
        (other.start > self.start).then(|| TimeRange {
            start: self.start,
            end: self.end.min(other.start),
        })
    }

    /// The part of this range that lies at or after `other` ends, if there
    /// is one.
    pub fn after(&self, other: &TimeRange) -> Option<TimeRange> {
        (other.end < self.end).then(|| TimeRange {
            start: self.start.max(other.end),
            end: self.end,
        })
    }
}
