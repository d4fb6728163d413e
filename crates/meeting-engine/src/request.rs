//! The meeting being asked for.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A request for a meeting: how long it runs, who must attend, and who
/// should attend if a slot can be found that suits them too.
///
/// Well-formed requests keep the two attendee sets disjoint; an id listed in
/// both is simply treated as required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    duration: u32,
    attendees: HashSet<String>,
    optional_attendees: HashSet<String>,
}

impl MeetingRequest {
    /// Create a request with required attendees only.
    pub fn new<I, S>(duration: u32, attendees: I) -> MeetingRequest
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MeetingRequest {
            duration,
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: HashSet::new(),
        }
    }

    /// Add optional attendees to the request.
    pub fn with_optional_attendees<I, S>(mut self, attendees: I) -> MeetingRequest
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(attendees.into_iter().map(Into::into));
        self
    }

    /// Requested meeting length in minutes.
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    /// The people who must be free for a slot to count.
    pub const fn attendees(&self) -> &HashSet<String> {
        &self.attendees
    }

    /// The people worth accommodating when possible.
    pub const fn optional_attendees(&self) -> &HashSet<String> {
        &self.optional_attendees
    }

    /// Whether the request names any required attendee.
    pub fn has_attendees(&self) -> bool {
        !self.attendees.is_empty()
    }

    /// Whether the request names any optional attendee.
    pub fn has_optional_attendees(&self) -> bool {
        !self.optional_attendees.is_empty()
    }
}
