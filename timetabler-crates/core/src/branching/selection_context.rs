use crate::basic_types::EventId;
use crate::basic_types::Timeslot;
use crate::basic_types::TimeslotSet;
#[cfg(doc)]
use crate::branching::EventSelector;
#[cfg(doc)]
use crate::branching::TimeslotSelector;
use crate::engine::State;
use crate::Instance;

/// The context provided to the [`EventSelector`] and [`TimeslotSelector`]; it gives read access to
/// the instance and to the current search node.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    instance: &'a Instance,
    state: &'a State,
}

impl<'a> SelectionContext<'a> {
    pub fn new(instance: &'a Instance, state: &'a State) -> Self {
        SelectionContext { instance, state }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    pub fn is_assigned(&self, event: EventId) -> bool {
        self.state.is_assigned(event)
    }

    /// The events which have not been assigned a timeslot yet, in increasing order.
    pub fn unassigned_events(&self) -> impl Iterator<Item = EventId> + 'a {
        self.state.unassigned_events()
    }

    /// The timeslots which are still candidates for `event`.
    pub fn domain(&self, event: EventId) -> TimeslotSet {
        self.state.domain(event)
    }

    pub fn get_size_of_domain(&self, event: EventId) -> u32 {
        self.state.domain(event).cardinality()
    }

    /// The number of neighbours of `event` in the conflict graph.
    pub fn degree(&self, event: EventId) -> usize {
        self.instance.degree(event)
    }

    /// The number of unassigned events which still have `timeslot` as a candidate.
    pub fn remaining_candidates(&self, timeslot: Timeslot) -> u32 {
        self.state.remaining_candidates(timeslot)
    }

    /// The number of rooms which are occupied in `timeslot`.
    pub fn used_rooms(&self, timeslot: Timeslot) -> u32 {
        self.state.used_rooms(timeslot)
    }
}
