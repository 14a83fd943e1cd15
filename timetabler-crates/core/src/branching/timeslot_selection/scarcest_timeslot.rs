use std::cmp::Ordering;

use log::trace;
use log::warn;

use super::TimeslotSelector;
use crate::basic_types::EventId;
use crate::basic_types::Random;
use crate::basic_types::Timeslot;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::RandomTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;

/// A [`TimeslotSelector`] which selects the candidate timeslot which is wanted by the fewest
/// unassigned events.
///
/// Ties are broken in favour of the timeslot in which the most rooms are already in use; any
/// remaining ties are left to the provided [`TieBreaker`].
#[derive(Debug)]
pub struct ScarcestTimeslot<TieBreaking> {
    tie_breaker: TieBreaking,
}

/// The value of a timeslot for the [`ScarcestTimeslot`] selector; smaller is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScarcestTimeslotValue {
    remaining_candidates: u32,
    used_rooms: u32,
}

impl PartialOrd for ScarcestTimeslotValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.remaining_candidates.cmp(&other.remaining_candidates) {
            // More used rooms is better, hence the reversed comparison.
            Ordering::Equal => Some(other.used_rooms.cmp(&self.used_rooms)),
            ordering => Some(ordering),
        }
    }
}

impl ScarcestTimeslot<RandomTieBreaker<Timeslot, ScarcestTimeslotValue>> {
    /// Breaks exact ties uniformly at random using `rng`.
    pub fn new(rng: Box<dyn Random>) -> Self {
        ScarcestTimeslot {
            tie_breaker: RandomTieBreaker::new(Direction::Minimum, rng),
        }
    }
}

impl ScarcestTimeslot<InOrderTieBreaker<Timeslot, ScarcestTimeslotValue>> {
    /// Breaks exact ties in favour of the earliest timeslot.
    pub fn in_order() -> Self {
        ScarcestTimeslot {
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl<TieBreaking> TimeslotSelector for ScarcestTimeslot<TieBreaking>
where
    TieBreaking: TieBreaker<Timeslot, ScarcestTimeslotValue> + std::fmt::Debug,
{
    fn select_timeslot(&mut self, context: &SelectionContext, event: EventId) -> Option<Timeslot> {
        if context.is_assigned(event) {
            warn!("Asked to select a timeslot for {event}, which is already assigned");
            return None;
        }

        for timeslot in context.domain(event).iter() {
            self.tie_breaker.consider(
                timeslot,
                ScarcestTimeslotValue {
                    remaining_candidates: context.remaining_candidates(timeslot),
                    used_rooms: context.used_rooms(timeslot),
                },
            );
        }

        let selected = self.tie_breaker.select();
        if let Some(timeslot) = selected {
            trace!(
                "Selected {timeslot} for {event} (remaining candidates {}, used rooms {})",
                context.remaining_candidates(timeslot),
                context.used_rooms(timeslot)
            );
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;
    use crate::basic_types::RoomId;
    use crate::engine::State;
    use crate::InstanceBuilder;
    use crate::Instance;

    fn timeslots(ids: &[u32]) -> Vec<Timeslot> {
        ids.iter().copied().map(Timeslot::new).collect()
    }

    fn rooms(num_rooms: u32) -> Vec<RoomId> {
        (0..num_rooms).map(RoomId::new).collect()
    }

    /// Event 0 can go anywhere; the other events make timeslot 0 the most wanted one.
    fn instance() -> Instance {
        let mut builder = InstanceBuilder::new(3, 2);
        let _ = builder.add_event(timeslots(&[0, 1, 2]), rooms(2));
        let _ = builder.add_event(timeslots(&[0, 1]), rooms(2));
        let _ = builder.add_event(timeslots(&[0, 2]), rooms(2));
        builder.build().expect("valid instance")
    }

    #[test]
    fn timeslot_with_the_fewest_remaining_candidates_is_selected() {
        let instance = instance();
        let state = State::root(&instance);

        let selected = ScarcestTimeslot::in_order()
            .select_timeslot(&SelectionContext::new(&instance, &state), EventId::new(0));

        assert_eq!(selected, Some(Timeslot::new(1)));
    }

    #[test]
    fn ties_are_broken_by_the_most_used_rooms() {
        let instance = instance();
        let mut state = State::root(&instance);
        // Timeslots 0 and 2 both have one remaining candidate afterwards, but timeslot 2 has a
        // room in use.
        assert!(state.try_assign(&instance, EventId::new(2), Timeslot::new(2)));
        assert!(state.discard(EventId::new(1), Timeslot::new(0)));

        let selected = ScarcestTimeslot::in_order()
            .select_timeslot(&SelectionContext::new(&instance, &state), EventId::new(0));

        assert_eq!(selected, Some(Timeslot::new(2)));
    }

    #[test]
    fn exact_ties_are_broken_randomly() {
        let mut builder = InstanceBuilder::new(3, 1);
        let event = builder.add_unrestricted_event();
        let instance = builder.build().expect("valid instance");
        let state = State::root(&instance);
        let rng = TestRandom {
            bools: vec![true, false],
        };
        let mut selector = ScarcestTimeslot::new(Box::new(rng));

        let selected = selector.select_timeslot(&SelectionContext::new(&instance, &state), event);

        assert_eq!(selected, Some(Timeslot::new(1)));
    }

    #[test]
    fn empty_domain_yields_nothing() {
        let mut builder = InstanceBuilder::new(2, 1);
        let event = builder.add_event(Vec::new(), rooms(1));
        let instance = builder.build().expect("valid instance");
        let state = State::root(&instance);

        let selected = ScarcestTimeslot::in_order()
            .select_timeslot(&SelectionContext::new(&instance, &state), event);

        assert_eq!(selected, None);
    }
}
