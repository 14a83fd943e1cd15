use std::fmt::Debug;

use crate::basic_types::EventId;
use crate::branching::SelectionContext;

/// A trait containing the interface for [`EventSelector`]s, specifying the method required for
/// selecting the unassigned event to branch on.
pub trait EventSelector: Debug {
    /// Determines which unassigned event to branch on next; returns [`None`] if every event has
    /// been assigned.
    fn select_event(&mut self, context: &SelectionContext) -> Option<EventId>;
}
