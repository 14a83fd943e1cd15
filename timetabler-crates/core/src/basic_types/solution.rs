use std::collections::hash_map::Entry;

use crate::basic_types::EventId;
use crate::basic_types::RoomId;
use crate::basic_types::Timeslot;
use crate::containers::HashMap;
use crate::containers::KeyedVec;
use crate::Instance;

/// A complete timetable: every event is assigned a timeslot and a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    assignments: KeyedVec<EventId, (Timeslot, RoomId)>,
}

impl Solution {
    /// Creates a solution where event `i` is assigned to `assignments[i]`.
    pub fn new(assignments: Vec<(Timeslot, RoomId)>) -> Self {
        Solution {
            assignments: KeyedVec::from(assignments),
        }
    }

    pub fn num_events(&self) -> usize {
        self.assignments.len()
    }

    pub fn timeslot(&self, event: EventId) -> Timeslot {
        self.assignments[event].0
    }

    pub fn room(&self, event: EventId) -> RoomId {
        self.assignments[event].1
    }

    /// Iterates over the events in increasing order, together with their timeslot and room.
    pub fn iter(&self) -> impl Iterator<Item = (EventId, Timeslot, RoomId)> + '_ {
        self.assignments
            .iter_with_keys()
            .map(|(event, &(timeslot, room))| (event, timeslot, room))
    }

    /// Returns every hard constraint of the `instance` which is violated by this solution.
    pub fn violations(&self, instance: &Instance) -> Vec<Violation> {
        if self.num_events() != instance.num_events() {
            return vec![Violation::EventCountMismatch {
                expected: instance.num_events(),
                actual: self.num_events(),
            }];
        }

        let mut violations = Vec::new();
        let mut occupants: HashMap<(Timeslot, RoomId), EventId> = HashMap::default();

        for (event, timeslot, room) in self.iter() {
            if !instance.candidate_timeslots(event).contains(timeslot) {
                violations.push(Violation::TimeslotNotCandidate { event, timeslot });
            }
            if instance.candidate_rooms(event).binary_search(&room).is_err() {
                violations.push(Violation::RoomNotCandidate { event, room });
            }

            match occupants.entry((timeslot, room)) {
                Entry::Occupied(occupant) => violations.push(Violation::RoomClash {
                    first: *occupant.get(),
                    second: event,
                    timeslot,
                    room,
                }),
                Entry::Vacant(vacant) => {
                    let _ = vacant.insert(event);
                }
            }

            for &other in instance.conflicts(event) {
                if other > event && self.timeslot(other) == timeslot {
                    violations.push(Violation::ConflictingEvents {
                        first: event,
                        second: other,
                        timeslot,
                    });
                }
            }

            for &after in instance.events_after(event) {
                if self.timeslot(after) <= timeslot {
                    violations.push(Violation::PrecedenceViolated {
                        before: event,
                        after,
                    });
                }
            }
        }

        violations
    }

    /// Whether the solution satisfies every hard constraint of `instance`.
    pub fn is_valid(&self, instance: &Instance) -> bool {
        self.violations(instance).is_empty()
    }

    /// The number of violated hard constraints; `0` for a feasible timetable.
    pub fn distance_to_feasibility(&self, instance: &Instance) -> usize {
        self.violations(instance).len()
    }
}

/// A hard constraint which is violated by a [`Solution`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("the solution assigns {actual} events but the instance has {expected}")]
    EventCountMismatch { expected: usize, actual: usize },
    #[error("{event} is assigned to {timeslot}, which is not one of its candidates")]
    TimeslotNotCandidate { event: EventId, timeslot: Timeslot },
    #[error("{event} is assigned to {room}, which is not one of its candidates")]
    RoomNotCandidate { event: EventId, room: RoomId },
    #[error("the conflicting events {first} and {second} are both assigned to {timeslot}")]
    ConflictingEvents {
        first: EventId,
        second: EventId,
        timeslot: Timeslot,
    },
    #[error("{first} and {second} both use {room} in {timeslot}")]
    RoomClash {
        first: EventId,
        second: EventId,
        timeslot: Timeslot,
        room: RoomId,
    },
    #[error("{before} should take place strictly before {after}")]
    PrecedenceViolated { before: EventId, after: EventId },
}

impl Violation {
    pub fn is_room_clash(&self) -> bool {
        matches!(self, Violation::RoomClash { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InstanceBuilder;

    fn place(timeslot: u32, room: u32) -> (Timeslot, RoomId) {
        (Timeslot::new(timeslot), RoomId::new(room))
    }

    fn instance() -> Instance {
        let mut builder = InstanceBuilder::new(3, 2);
        let a = builder.add_unrestricted_event();
        let b = builder.add_unrestricted_event();
        let c = builder.add_event([Timeslot::new(1), Timeslot::new(2)], [RoomId::new(0)]);
        builder.add_conflict(a, b);
        builder.add_precedence(a, c);
        builder.build().expect("valid instance")
    }

    #[test]
    fn feasible_solution_has_no_violations() {
        let solution = Solution::new(vec![place(0, 0), place(1, 1), place(1, 0)]);

        assert!(solution.is_valid(&instance()));
        assert_eq!(solution.distance_to_feasibility(&instance()), 0);
    }

    #[test]
    fn conflicting_events_in_the_same_timeslot_are_reported() {
        let solution = Solution::new(vec![place(0, 0), place(0, 1), place(1, 0)]);

        assert_eq!(
            solution.violations(&instance()),
            vec![Violation::ConflictingEvents {
                first: EventId::new(0),
                second: EventId::new(1),
                timeslot: Timeslot::new(0),
            }]
        );
    }

    #[test]
    fn precedence_and_candidate_violations_are_reported() {
        let solution = Solution::new(vec![place(2, 0), place(0, 0), place(2, 1)]);

        let violations = solution.violations(&instance());

        assert!(violations.contains(&Violation::RoomNotCandidate {
            event: EventId::new(2),
            room: RoomId::new(1),
        }));
        assert!(violations.contains(&Violation::PrecedenceViolated {
            before: EventId::new(0),
            after: EventId::new(2),
        }));
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn two_events_in_the_same_place_clash() {
        let solution = Solution::new(vec![place(0, 1), place(1, 0), place(1, 0)]);

        let violations = solution.violations(&instance());

        assert_eq!(violations.iter().filter(|v| v.is_room_clash()).count(), 1);
        assert!(violations.contains(&Violation::RoomClash {
            first: EventId::new(1),
            second: EventId::new(2),
            timeslot: Timeslot::new(1),
            room: RoomId::new(0),
        }));
    }

    #[test]
    fn incomplete_solution_is_rejected() {
        let solution = Solution::new(vec![place(0, 0)]);

        assert!(!solution.is_valid(&instance()));
    }
}
