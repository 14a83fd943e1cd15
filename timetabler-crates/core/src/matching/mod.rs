//! The per-timeslot room assignment of the events which have been placed in that timeslot.
mod event_room_allocation;

pub use event_room_allocation::*;
