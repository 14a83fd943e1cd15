use thiserror::Error;

#[cfg(doc)]
use crate::engine::SearchLimits;

/// The instance does not fit within the [`SearchLimits`] of the solver; it is reported before any
/// search takes place.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CapacityError {
    #[error("The instance has {num_events} events, but at most {max_events} are supported")]
    TooManyEvents {
        num_events: usize,
        max_events: usize,
    },
    #[error("The instance has {num_rooms} rooms, but at most {max_rooms} are supported")]
    TooManyRooms { num_rooms: usize, max_rooms: usize },
    #[error("The instance has {num_timeslots} timeslots, but at most {max_timeslots} are supported")]
    TooManyTimeslots {
        num_timeslots: usize,
        max_timeslots: usize,
    },
}
