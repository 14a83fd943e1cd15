//! Provides the [`TimeslotSelector`] trait which is required for choosing the timeslot in which
//! the selected event is placed.
mod scarcest_timeslot;
mod timeslot_selector;

pub use scarcest_timeslot::*;
pub use timeslot_selector::TimeslotSelector;
