use std::fmt::Debug;

use crate::basic_types::EventId;
use crate::basic_types::Timeslot;
use crate::branching::SelectionContext;

/// A trait containing the interface for [`TimeslotSelector`]s, specifying the method required for
/// selecting the timeslot in which to place an event.
pub trait TimeslotSelector: Debug {
    /// Determines which of the remaining candidates of the unassigned `event` to try next;
    /// returns [`None`] if the domain of `event` is empty.
    ///
    /// The returned timeslot must be in [`SelectionContext::domain`] of `event`; the search drops
    /// the current node when it is not.
    fn select_timeslot(&mut self, context: &SelectionContext, event: EventId) -> Option<Timeslot>;
}
