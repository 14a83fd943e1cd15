use thiserror::Error;

use crate::basic_types::EventId;
use crate::basic_types::RoomId;
use crate::basic_types::Timeslot;
#[cfg(doc)]
use crate::instance::InstanceBuilder;

/// Errors related to building an [`Instance`](crate::Instance) with the [`InstanceBuilder`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InstanceError {
    /// The candidate timeslots of an event are stored in a single machine word.
    #[error("An instance can have at most 64 timeslots, but {0} were requested")]
    UnsupportedNumberOfTimeslots(usize),
    #[error("The event {0} does not exist")]
    UnknownEvent(EventId),
    #[error("The event {event} has candidate timeslot {timeslot}, but there are only {num_timeslots} timeslots")]
    TimeslotOutOfRange {
        event: EventId,
        timeslot: Timeslot,
        num_timeslots: usize,
    },
    #[error("The event {event} has candidate room {room}, but there are only {num_rooms} rooms")]
    RoomOutOfRange {
        event: EventId,
        room: RoomId,
        num_rooms: usize,
    },
    #[error("The event {0} cannot conflict with itself")]
    SelfConflict(EventId),
    #[error("The event {0} cannot precede itself")]
    SelfPrecedence(EventId),
    /// The transitive closure of the precedence relation requires an event to take place strictly
    /// after itself.
    #[error("The precedence relations require the event {0} to take place after itself")]
    CyclicPrecedence(EventId),
}
