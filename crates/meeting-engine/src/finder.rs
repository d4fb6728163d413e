//! Find every slot in the day where a requested meeting can happen.
//!
//! Starts from the whole day as a single free range and carves out the span
//! of every event that shares an attendee with the request. Optional
//! attendees are accommodated when possible: the search first runs with them
//! included, and only drops them when that leaves no slot at all.

use crate::event::Event;
use crate::range::TimeRange;
use crate::request::MeetingRequest;

/// Find all time ranges during which every required attendee (and, when at
/// least one such range exists, every optional attendee too) is free for the
/// full requested duration.
///
/// Returns ranges sorted ascending by start, pairwise non-overlapping, each
/// at least `request.duration()` long. An unsatisfiable request yields an
/// empty vector, never an error.
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    // Nothing fits in a day shorter than the meeting itself.
    if request.duration() > TimeRange::WHOLE_DAY.duration() {
        return Vec::new();
    }

    if request.has_optional_attendees() {
        let combined = carve_free_slots(events, request, true);
        if !combined.is_empty() {
            return combined;
        }
    }

    carve_free_slots(events, request, false)
}

/// Find the earliest slot that can host the meeting.
///
/// Delegates to [`find_meeting_times`]; every slot it returns already
/// satisfies the duration bound, so the first one is the answer.
pub fn find_first_meeting_time(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    find_meeting_times(events, request).into_iter().next()
}

/// Whether `event` constrains the search: it does iff it shares an attendee
/// with the request's required set, or with the optional set when that set
/// is under consideration.
fn is_relevant(event: &Event, request: &MeetingRequest, consider_optional: bool) -> bool {
    !event.attendees().is_disjoint(request.attendees())
        || (consider_optional && !event.attendees().is_disjoint(request.optional_attendees()))
}

/// Carve the day down to the ranges left free by every relevant event.
///
/// Each relevant event splits every free range it overlaps into the parts
/// before and after its span; parts shorter than the requested duration are
/// dropped on the spot, since no later event can grow them back. The
/// replacement set for one event is computed against the free ranges as they
/// stood before that event, then swapped in whole, so an event never carves
/// its own output. Events are processed once each and the result does not
/// depend on their order.
fn carve_free_slots(
    events: &[Event],
    request: &MeetingRequest,
    consider_optional: bool,
) -> Vec<TimeRange> {
    let min_duration = request.duration();
    let mut free = vec![TimeRange::WHOLE_DAY];

    for event in events {
        if !is_relevant(event, request, consider_optional) {
            continue;
        }

        let busy = event.when();
        let mut carved = Vec::with_capacity(free.len() + 1);
        for slot in &free {
            if !slot.overlaps(&busy) {
                carved.push(*slot);
                continue;
            }
            for remainder in [slot.before(&busy), slot.after(&busy)].into_iter().flatten() {
                if remainder.duration() >= min_duration {
                    carved.push(remainder);
                }
            }
        }
        free = carved;
    }

    free.sort_unstable();
    free
}
