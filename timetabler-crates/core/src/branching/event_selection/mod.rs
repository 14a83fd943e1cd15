//! Provides the [`EventSelector`] trait which is required for choosing the event to branch on
//! next.
mod event_selector;
mod most_constrained_event;

pub use event_selector::EventSelector;
pub use most_constrained_event::*;
