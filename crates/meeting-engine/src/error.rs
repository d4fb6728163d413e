//! Error types for meeting-engine operations.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MeetingError {
    /// A time range was constructed with its end before its start.
    #[error("invalid time range: end {end} is before start {start}")]
    InvalidRange { start: u32, end: u32 },

    /// A clock reading outside the 24-hour day (hours > 24, minutes > 59,
    /// or a total past the end of the day).
    #[error("invalid clock reading: {hours:02}:{minutes:02}")]
    InvalidClock { hours: u32, minutes: u32 },
}

pub type Result<T> = std::result::Result<T, MeetingError>;
