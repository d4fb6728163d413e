//! # meeting-engine
//!
//! Deterministic single-day meeting-slot search over attendee calendars.
//!
//! Given the events already on people's calendars and a request naming a
//! duration, required attendees, and optional attendees, the engine returns
//! every window of the day in which the meeting fits. Windows that suit the
//! optional attendees as well are preferred; if none exist, the search falls
//! back to the required attendees alone.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_engine::{find_meeting_times, Event, MeetingRequest, TimeRange};
//!
//! // Alice is busy 09:00-10:00.
//! let events = vec![Event::new(
//!     TimeRange::from_start_end(540, 600)?,
//!     ["alice@example.com"],
//! )];
//! let request = MeetingRequest::new(30, ["alice@example.com"]);
//!
//! let slots = find_meeting_times(&events, &request);
//! assert_eq!(slots.len(), 2); // 00:00-09:00 and 10:00-24:00
//! # Ok::<(), meeting_engine::MeetingError>(())
//! ```
//!
//! ## Modules
//!
//! - [`range`] — [`TimeRange`], minute-granularity intervals within one day
//! - [`event`] — [`Event`], a scheduled commitment with its attendees
//! - [`request`] — [`MeetingRequest`], the meeting being asked for
//! - [`finder`] — the slot-search algorithm
//! - [`error`] — error types

pub mod error;
pub mod event;
pub mod finder;
pub mod range;
pub mod request;

pub use error::MeetingError;
pub use event::Event;
pub use finder::{find_first_meeting_time, find_meeting_times};
pub use range::TimeRange;
pub use request::MeetingRequest;
