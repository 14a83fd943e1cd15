//! Contains the heuristics which determine the order in which the search explores the
//! assignments: an [`EventSelector`] picks the event to branch on and a [`TimeslotSelector`]
//! picks the timeslot to try for it. Ties between equally good candidates are broken by a
//! [`TieBreaker`](tie_breaking::TieBreaker).
pub mod event_selection;
mod selection_context;
pub mod tie_breaking;
pub mod timeslot_selection;

pub use event_selection::EventSelector;
pub use selection_context::SelectionContext;
pub use timeslot_selection::TimeslotSelector;
