//! A pre-existing calendar commitment.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::range::TimeRange;

/// An already-scheduled event: a time span plus the people attending it.
///
/// Immutable once constructed. Attendee identifiers are opaque tokens
/// (typically email addresses); the set is hash-backed so intersection
/// checks against a request cost `O(min(|a|, |b|))`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    when: TimeRange,
    attendees: HashSet<String>,
}

impl Event {
    /// Create an event from its span and attendee list. Duplicate attendee
    /// ids collapse into the set.
    pub fn new<I, S>(when: TimeRange, attendees: I) -> Event
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event {
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// The time span this event occupies.
    pub const fn when(&self) -> TimeRange {
        self.when
    }

    /// The people attending this event.
    pub const fn attendees(&self) -> &HashSet<String> {
        &self.attendees
    }
}
