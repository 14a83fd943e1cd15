//! The (read-only) description of a timetabling problem.
//!
//! An [`Instance`] is created through an [`InstanceBuilder`], which derives the conflict graph,
//! the transitively closed precedence relations and the reverse indices from the raw input.
mod builder;
mod instance_error;

pub use builder::InstanceBuilder;
pub use instance_error::InstanceError;

use crate::basic_types::EventId;
use crate::basic_types::RoomId;
use crate::basic_types::Timeslot;
use crate::basic_types::TimeslotSet;
use crate::containers::KeyedVec;

/// A timetabling problem: a set of events which should each be assigned a timeslot and a room.
///
/// For every event, the instance stores its candidate timeslots and rooms (already filtered on
/// availability, room features and room capacity), the events it conflicts with (i.e. which may
/// not share a timeslot with it) and the events which should take place strictly before/after it.
#[derive(Debug, Clone)]
pub struct Instance {
    num_timeslots: usize,
    num_rooms: usize,
    candidate_timeslots: KeyedVec<EventId, TimeslotSet>,
    candidate_rooms: KeyedVec<EventId, Vec<RoomId>>,
    conflicts: KeyedVec<EventId, Vec<EventId>>,
    events_after: KeyedVec<EventId, Vec<EventId>>,
    events_before: KeyedVec<EventId, Vec<EventId>>,
    timeslot_events: KeyedVec<Timeslot, Vec<EventId>>,
    room_events: KeyedVec<RoomId, Vec<EventId>>,
}

impl Instance {
    pub fn num_events(&self) -> usize {
        self.candidate_timeslots.len()
    }

    pub fn num_rooms(&self) -> usize {
        self.num_rooms
    }

    pub fn num_timeslots(&self) -> usize {
        self.num_timeslots
    }

    pub fn events(&self) -> impl Iterator<Item = EventId> {
        self.candidate_timeslots.keys()
    }

    pub fn timeslots(&self) -> impl Iterator<Item = Timeslot> {
        (0..self.num_timeslots as u32).map(Timeslot::new)
    }

    /// The timeslots in which `event` may take place.
    pub fn candidate_timeslots(&self, event: EventId) -> TimeslotSet {
        self.candidate_timeslots[event]
    }

    /// The rooms in which `event` may take place, in increasing order.
    pub fn candidate_rooms(&self, event: EventId) -> &[RoomId] {
        &self.candidate_rooms[event]
    }

    /// The events which may not share a timeslot with `event`, in increasing order.
    pub fn conflicts(&self, event: EventId) -> &[EventId] {
        &self.conflicts[event]
    }

    /// The number of neighbours of `event` in the conflict graph.
    pub fn degree(&self, event: EventId) -> usize {
        self.conflicts[event].len()
    }

    pub fn are_conflicting(&self, first: EventId, second: EventId) -> bool {
        self.conflicts[first].binary_search(&second).is_ok()
    }

    /// The events which should take place strictly after `event` (transitively closed).
    pub fn events_after(&self, event: EventId) -> &[EventId] {
        &self.events_after[event]
    }

    /// The events which should take place strictly before `event` (transitively closed).
    pub fn events_before(&self, event: EventId) -> &[EventId] {
        &self.events_before[event]
    }

    /// The events which have `timeslot` as a candidate.
    pub fn events_for_timeslot(&self, timeslot: Timeslot) -> &[EventId] {
        &self.timeslot_events[timeslot]
    }

    /// The events which have `room` as a candidate.
    pub fn events_for_room(&self, room: RoomId) -> &[EventId] {
        &self.room_events[room]
    }
}
