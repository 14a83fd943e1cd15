use std::cmp::Ordering;

use log::trace;

use super::EventSelector;
use crate::basic_types::EventId;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;

/// An [`EventSelector`] which selects the unassigned event with the fewest remaining candidate
/// timeslots.
///
/// It breaks ties according to the degree of the event in the conflict graph (giving priority to
/// the event with more conflicts); remaining ties go to the event with the lowest index.
#[derive(Debug)]
pub struct MostConstrainedEvent<TieBreaking> {
    tie_breaker: TieBreaking,
}

/// The value of an event for the [`MostConstrainedEvent`] selector; smaller is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MostConstrainedValue {
    domain_size: u32,
    degree: usize,
}

impl PartialOrd for MostConstrainedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.domain_size.cmp(&other.domain_size) {
            // Note that we are comparing `other` to `self` instead of the normal `self` to `other`,
            // this is because the tie-breaking is minimizing while we want to tie-break in the
            // maximizing direction.
            Ordering::Equal => Some(other.degree.cmp(&self.degree)),
            ordering => Some(ordering),
        }
    }
}

impl MostConstrainedEvent<InOrderTieBreaker<EventId, MostConstrainedValue>> {
    pub fn new() -> Self {
        MostConstrainedEvent {
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl Default for MostConstrainedEvent<InOrderTieBreaker<EventId, MostConstrainedValue>> {
    fn default() -> Self {
        MostConstrainedEvent::new()
    }
}

impl<TieBreaking> EventSelector for MostConstrainedEvent<TieBreaking>
where
    TieBreaking: TieBreaker<EventId, MostConstrainedValue> + std::fmt::Debug,
{
    fn select_event(&mut self, context: &SelectionContext) -> Option<EventId> {
        for event in context.unassigned_events() {
            self.tie_breaker.consider(
                event,
                MostConstrainedValue {
                    domain_size: context.get_size_of_domain(event),
                    degree: context.degree(event),
                },
            );
        }

        let selected = self.tie_breaker.select();
        if let Some(event) = selected {
            trace!(
                "Selected {event} with domain {} and degree {}",
                context.domain(event),
                context.degree(event)
            );
        }
        selected
    }
}
