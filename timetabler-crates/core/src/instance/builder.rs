use log::debug;

use super::Instance;
use super::InstanceError;
use crate::basic_types::EventId;
use crate::basic_types::RoomId;
use crate::basic_types::Timeslot;
use crate::basic_types::TimeslotSet;
use crate::basic_types::MAX_NUM_TIMESLOTS;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// Collects the events, conflicts and precedences of a timetabling problem and derives an
/// [`Instance`] from them.
///
/// Next to the conflicts which are added explicitly, [`InstanceBuilder::build`] adds a conflict
/// - between every pair of events in the (transitively closed) precedence relation, and
/// - between two events which can both only take place in the same single room.
///
/// # Example
/// ```rust
/// # use timetabler_core::InstanceBuilder;
/// # use timetabler_core::RoomId;
/// # use timetabler_core::Timeslot;
/// let mut builder = InstanceBuilder::new(2, 1);
/// let lecture = builder.add_event([Timeslot::new(0), Timeslot::new(1)], [RoomId::new(0)]);
/// let exam = builder.add_event([Timeslot::new(0), Timeslot::new(1)], [RoomId::new(0)]);
/// builder.add_precedence(lecture, exam);
///
/// let instance = builder.build().expect("valid instance");
/// assert!(instance.are_conflicting(lecture, exam));
/// assert_eq!(instance.events_after(lecture), &[exam]);
/// ```
#[derive(Debug, Clone)]
pub struct InstanceBuilder {
    num_timeslots: usize,
    num_rooms: usize,
    candidate_timeslots: KeyedVec<EventId, Vec<Timeslot>>,
    candidate_rooms: KeyedVec<EventId, Vec<RoomId>>,
    conflicts: Vec<(EventId, EventId)>,
    precedences: Vec<(EventId, EventId)>,
}

impl InstanceBuilder {
    pub fn new(num_timeslots: usize, num_rooms: usize) -> Self {
        InstanceBuilder {
            num_timeslots,
            num_rooms,
            candidate_timeslots: KeyedVec::default(),
            candidate_rooms: KeyedVec::default(),
            conflicts: Vec::new(),
            precedences: Vec::new(),
        }
    }

    /// Adds an event which can take place in the provided timeslots and rooms.
    pub fn add_event(
        &mut self,
        candidate_timeslots: impl IntoIterator<Item = Timeslot>,
        candidate_rooms: impl IntoIterator<Item = RoomId>,
    ) -> EventId {
        let _ = self
            .candidate_rooms
            .push(candidate_rooms.into_iter().collect());
        self.candidate_timeslots
            .push(candidate_timeslots.into_iter().collect())
    }

    /// Adds an event which can take place in every timeslot and every room.
    pub fn add_unrestricted_event(&mut self) -> EventId {
        let timeslots = (0..self.num_timeslots as u32).map(Timeslot::new);
        let rooms = (0..self.num_rooms as u32).map(RoomId::new);
        self.add_event(timeslots.collect::<Vec<_>>(), rooms.collect::<Vec<_>>())
    }

    /// Specifies that `first` and `second` may not take place in the same timeslot.
    pub fn add_conflict(&mut self, first: EventId, second: EventId) {
        self.conflicts.push((first, second));
    }

    /// Specifies that `before` should take place in a timeslot strictly before the timeslot of
    /// `after`.
    pub fn add_precedence(&mut self, before: EventId, after: EventId) {
        self.precedences.push((before, after));
    }

    pub fn num_events(&self) -> usize {
        self.candidate_timeslots.len()
    }

    fn check_event(&self, event: EventId) -> Result<(), InstanceError> {
        if event.index() < self.num_events() {
            Ok(())
        } else {
            Err(InstanceError::UnknownEvent(event))
        }
    }

    pub fn build(self) -> Result<Instance, InstanceError> {
        if self.num_timeslots > MAX_NUM_TIMESLOTS {
            return Err(InstanceError::UnsupportedNumberOfTimeslots(
                self.num_timeslots,
            ));
        }

        let num_events = self.num_events();

        let mut candidate_timeslots: KeyedVec<EventId, TimeslotSet> = KeyedVec::default();
        for (event, timeslots) in self.candidate_timeslots.iter_with_keys() {
            if let Some(&timeslot) = timeslots
                .iter()
                .find(|timeslot| timeslot.index() >= self.num_timeslots)
            {
                return Err(InstanceError::TimeslotOutOfRange {
                    event,
                    timeslot,
                    num_timeslots: self.num_timeslots,
                });
            }
            let _ = candidate_timeslots.push(timeslots.iter().copied().collect::<TimeslotSet>());
        }

        let mut candidate_rooms: KeyedVec<EventId, Vec<RoomId>> = KeyedVec::default();
        for (event, rooms) in self.candidate_rooms.iter_with_keys() {
            if let Some(&room) = rooms.iter().find(|room| room.index() >= self.num_rooms) {
                return Err(InstanceError::RoomOutOfRange {
                    event,
                    room,
                    num_rooms: self.num_rooms,
                });
            }
            let mut rooms = rooms.clone();
            rooms.sort_unstable();
            rooms.dedup();
            let _ = candidate_rooms.push(rooms);
        }

        let mut conflicts: KeyedVec<EventId, HashSet<EventId>> = KeyedVec::default();
        conflicts.resize(num_events, HashSet::default());

        for &(first, second) in &self.conflicts {
            self.check_event(first)?;
            self.check_event(second)?;
            if first == second {
                return Err(InstanceError::SelfConflict(first));
            }
            let _ = conflicts[first].insert(second);
            let _ = conflicts[second].insert(first);
        }

        let mut direct_successors: KeyedVec<EventId, Vec<EventId>> = KeyedVec::default();
        direct_successors.resize(num_events, Vec::new());
        for &(before, after) in &self.precedences {
            self.check_event(before)?;
            self.check_event(after)?;
            if before == after {
                return Err(InstanceError::SelfPrecedence(before));
            }
            direct_successors[before].push(after);
        }

        let mut events_after: KeyedVec<EventId, HashSet<EventId>> = KeyedVec::default();
        events_after.resize(num_events, HashSet::default());
        let mut events_before: KeyedVec<EventId, HashSet<EventId>> = KeyedVec::default();
        events_before.resize(num_events, HashSet::default());

        // Every event reachable from `before` in the precedence graph should take place after it.
        for before in direct_successors.keys() {
            let mut stack = direct_successors[before].clone();
            while let Some(event) = stack.pop() {
                if event == before {
                    return Err(InstanceError::CyclicPrecedence(before));
                }
                if !events_after[before].insert(event) {
                    continue;
                }

                let _ = events_before[event].insert(before);
                let _ = conflicts[before].insert(event);
                let _ = conflicts[event].insert(before);

                stack.extend(direct_successors[event].iter().copied());
            }
        }

        // Two events which can only use the same room can never share a timeslot.
        let mut single_room_events: KeyedVec<RoomId, Vec<EventId>> = KeyedVec::default();
        single_room_events.resize(self.num_rooms, Vec::new());
        for (event, rooms) in candidate_rooms.iter_with_keys() {
            if let [room] = rooms.as_slice() {
                single_room_events[*room].push(event);
            }
        }
        for events in single_room_events.iter() {
            for (index, &first) in events.iter().enumerate() {
                for &second in &events[index + 1..] {
                    let _ = conflicts[first].insert(second);
                    let _ = conflicts[second].insert(first);
                }
            }
        }

        let mut timeslot_events: KeyedVec<Timeslot, Vec<EventId>> = KeyedVec::default();
        timeslot_events.resize(self.num_timeslots, Vec::new());
        for (event, timeslots) in candidate_timeslots.iter_with_keys() {
            for timeslot in timeslots.iter() {
                timeslot_events[timeslot].push(event);
            }
        }

        let mut room_events: KeyedVec<RoomId, Vec<EventId>> = KeyedVec::default();
        room_events.resize(self.num_rooms, Vec::new());
        for (event, rooms) in candidate_rooms.iter_with_keys() {
            for &room in rooms {
                room_events[room].push(event);
            }
        }

        let instance = Instance {
            num_timeslots: self.num_timeslots,
            num_rooms: self.num_rooms,
            candidate_timeslots,
            candidate_rooms,
            conflicts: into_sorted(conflicts),
            events_after: into_sorted(events_after),
            events_before: into_sorted(events_before),
            timeslot_events,
            room_events,
        };

        debug!(
            "Built instance with {} events, {} rooms and {} timeslots ({} conflict edges)",
            instance.num_events(),
            instance.num_rooms(),
            instance.num_timeslots(),
            instance.events().map(|event| instance.degree(event)).sum::<usize>() / 2
        );

        Ok(instance)
    }
}

fn into_sorted(sets: KeyedVec<EventId, HashSet<EventId>>) -> KeyedVec<EventId, Vec<EventId>> {
    let sorted = sets
        .iter()
        .map(|set| {
            let mut events = set.iter().copied().collect::<Vec<_>>();
            events.sort_unstable();
            events
        })
        .collect::<Vec<_>>();
    KeyedVec::from(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_timeslots(num_timeslots: u32) -> Vec<Timeslot> {
        (0..num_timeslots).map(Timeslot::new).collect()
    }

    #[test]
    fn explicit_conflicts_are_symmetric() {
        let mut builder = InstanceBuilder::new(3, 2);
        let a = builder.add_unrestricted_event();
        let b = builder.add_unrestricted_event();
        let c = builder.add_unrestricted_event();
        builder.add_conflict(a, b);

        let instance = builder.build().expect("valid instance");

        assert!(instance.are_conflicting(a, b));
        assert!(instance.are_conflicting(b, a));
        assert!(!instance.are_conflicting(a, c));
        assert_eq!(instance.degree(c), 0);
    }

    #[test]
    fn precedence_is_transitively_closed() {
        let mut builder = InstanceBuilder::new(4, 3);
        let a = builder.add_unrestricted_event();
        let b = builder.add_unrestricted_event();
        let c = builder.add_unrestricted_event();
        // The closure may not depend on the insertion order.
        builder.add_precedence(b, c);
        builder.add_precedence(a, b);

        let instance = builder.build().expect("valid instance");

        assert_eq!(instance.events_after(a), &[b, c]);
        assert_eq!(instance.events_before(c), &[a, b]);
        assert!(instance.are_conflicting(a, c));
        assert!(instance.are_conflicting(b, c));
    }

    #[test]
    fn cyclic_precedence_is_rejected() {
        let mut builder = InstanceBuilder::new(4, 1);
        let a = builder.add_unrestricted_event();
        let b = builder.add_unrestricted_event();
        let c = builder.add_unrestricted_event();
        builder.add_precedence(a, b);
        builder.add_precedence(b, c);
        builder.add_precedence(c, a);

        let result = builder.build();

        assert!(matches!(result, Err(InstanceError::CyclicPrecedence(_))));
    }

    #[test]
    fn events_sharing_a_single_room_conflict() {
        let mut builder = InstanceBuilder::new(2, 2);
        let a = builder.add_event(all_timeslots(2), [RoomId::new(1)]);
        let b = builder.add_event(all_timeslots(2), [RoomId::new(1)]);
        let c = builder.add_event(all_timeslots(2), [RoomId::new(0), RoomId::new(1)]);

        let instance = builder.build().expect("valid instance");

        assert!(instance.are_conflicting(a, b));
        assert!(!instance.are_conflicting(a, c));
    }

    #[test]
    fn reverse_indices_are_derived() {
        let mut builder = InstanceBuilder::new(3, 2);
        let a = builder.add_event([Timeslot::new(0), Timeslot::new(2)], [RoomId::new(0)]);
        let b = builder.add_event([Timeslot::new(2)], [RoomId::new(0), RoomId::new(1)]);

        let instance = builder.build().expect("valid instance");

        assert_eq!(instance.events_for_timeslot(Timeslot::new(0)), &[a]);
        assert!(instance.events_for_timeslot(Timeslot::new(1)).is_empty());
        assert_eq!(instance.events_for_timeslot(Timeslot::new(2)), &[a, b]);
        assert_eq!(instance.events_for_room(RoomId::new(1)), &[b]);
    }

    #[test]
    fn out_of_range_candidates_are_rejected() {
        let mut builder = InstanceBuilder::new(2, 1);
        let _ = builder.add_event([Timeslot::new(2)], [RoomId::new(0)]);
        assert!(matches!(
            builder.build(),
            Err(InstanceError::TimeslotOutOfRange { .. })
        ));

        let mut builder = InstanceBuilder::new(2, 1);
        let _ = builder.add_event([Timeslot::new(0)], [RoomId::new(1)]);
        assert!(matches!(
            builder.build(),
            Err(InstanceError::RoomOutOfRange { .. })
        ));
    }

    #[test]
    fn self_conflicts_and_unknown_events_are_rejected() {
        let mut builder = InstanceBuilder::new(2, 1);
        let a = builder.add_unrestricted_event();
        builder.add_conflict(a, a);
        assert_eq!(builder.build().unwrap_err(), InstanceError::SelfConflict(a));

        let mut builder = InstanceBuilder::new(2, 1);
        let a = builder.add_unrestricted_event();
        builder.add_conflict(a, EventId::new(7));
        assert_eq!(
            builder.build().unwrap_err(),
            InstanceError::UnknownEvent(EventId::new(7))
        );
    }

    #[test]
    fn too_many_timeslots_are_rejected() {
        let builder = InstanceBuilder::new(65, 1);

        assert_eq!(
            builder.build().unwrap_err(),
            InstanceError::UnsupportedNumberOfTimeslots(65)
        );
    }
}
