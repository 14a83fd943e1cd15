use crate::basic_types::EventId;
use crate::basic_types::Solution;
use crate::basic_types::Timeslot;
use crate::basic_types::TimeslotCounters;
use crate::basic_types::TimeslotSet;
use crate::containers::KeyedVec;
use crate::matching::EventRoomAllocation;
use crate::timetabler_assert_advanced;
use crate::timetabler_assert_simple;
use crate::Instance;

/// The result of propagating a decision; it fails as soon as the domain of an unassigned event
/// becomes empty.
pub(crate) type PropagationStatus = Result<(), EmptyDomain>;

/// The domain of the contained (unassigned) event has been wiped out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EmptyDomain(pub(crate) EventId);

/// A search node: a complete snapshot of a partial timetable.
///
/// A node owns all of its data; cloning a node never shares anything with the original, hence
/// abandoning a node never affects its ancestors.
#[derive(Debug)]
pub struct State {
    /// The timeslot of every event, [`None`] if it has not been assigned yet
    coloring: KeyedVec<EventId, Option<Timeslot>>,
    /// The candidate timeslots which are left for every event; `{t}` once assigned to `t`
    domains: KeyedVec<EventId, TimeslotSet>,
    /// For every timeslot, the number of unassigned events which still have it as a candidate
    remaining_candidates: TimeslotCounters,
    allocations: KeyedVec<Timeslot, EventRoomAllocation>,
    /// Whether this node still has an untried branch
    visitable: bool,
    num_assigned: usize,
}

impl Clone for State {
    fn clone(&self) -> Self {
        State {
            coloring: self.coloring.clone(),
            domains: self.domains.clone(),
            remaining_candidates: self.remaining_candidates.clone(),
            allocations: self.allocations.clone(),
            visitable: self.visitable,
            num_assigned: self.num_assigned,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.coloring.clone_from(&source.coloring);
        self.domains.clone_from(&source.domains);
        self.remaining_candidates
            .clone_from(&source.remaining_candidates);
        self.allocations.clone_from(&source.allocations);
        self.visitable = source.visitable;
        self.num_assigned = source.num_assigned;
    }
}

impl State {
    /// Creates the root node in which every event is unassigned and has all of its candidate
    /// timeslots.
    pub(crate) fn root(instance: &Instance) -> Self {
        let domains = instance
            .events()
            .map(|event| instance.candidate_timeslots(event))
            .collect::<Vec<_>>();
        let remaining_candidates = instance
            .timeslots()
            .map(|timeslot| instance.events_for_timeslot(timeslot).len() as u32)
            .collect::<Vec<_>>();
        let allocations = instance
            .timeslots()
            .map(|_| EventRoomAllocation::new(instance.num_rooms()))
            .collect::<Vec<_>>();

        State {
            coloring: KeyedVec::from(vec![None; instance.num_events()]),
            domains: KeyedVec::from(domains),
            remaining_candidates: KeyedVec::from(remaining_candidates),
            allocations: KeyedVec::from(allocations),
            visitable: true,
            num_assigned: 0,
        }
    }

    pub fn num_events(&self) -> usize {
        self.coloring.len()
    }

    pub fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    pub fn timeslot_of(&self, event: EventId) -> Option<Timeslot> {
        self.coloring[event]
    }

    pub fn is_assigned(&self, event: EventId) -> bool {
        self.coloring[event].is_some()
    }

    /// The events which have not been assigned a timeslot yet, in increasing order.
    pub fn unassigned_events(&self) -> impl Iterator<Item = EventId> + '_ {
        self.coloring
            .iter_with_keys()
            .filter(|(_, timeslot)| timeslot.is_none())
            .map(|(event, _)| event)
    }

    pub fn domain(&self, event: EventId) -> TimeslotSet {
        self.domains[event]
    }

    /// The number of unassigned events which still have `timeslot` as a candidate.
    pub fn remaining_candidates(&self, timeslot: Timeslot) -> u32 {
        self.remaining_candidates[timeslot]
    }

    pub fn allocation(&self, timeslot: Timeslot) -> &EventRoomAllocation {
        &self.allocations[timeslot]
    }

    pub fn used_rooms(&self, timeslot: Timeslot) -> u32 {
        self.allocations[timeslot].used_rooms()
    }

    pub fn is_visitable(&self) -> bool {
        self.visitable
    }

    pub(crate) fn set_visitable(&mut self, visitable: bool) {
        self.visitable = visitable;
    }

    /// Removes `timeslot` from the domain of the unassigned `event`, returns whether the domain
    /// changed.
    pub(crate) fn discard(&mut self, event: EventId, timeslot: Timeslot) -> bool {
        timetabler_assert_simple!(!self.is_assigned(event));
        self.domains[event].discard(timeslot, &mut self.remaining_candidates)
    }

    /// Attempts to place `event` in `timeslot`, which fails if no room can be found for it.
    ///
    /// On success, the event is assigned and its domain becomes `{timeslot}`; its candidates no
    /// longer contribute to the remaining candidate counters.
    pub(crate) fn try_assign(
        &mut self,
        instance: &Instance,
        event: EventId,
        timeslot: Timeslot,
    ) -> bool {
        timetabler_assert_simple!(!self.is_assigned(event), "{event} is assigned twice");
        timetabler_assert_simple!(self.domains[event].contains(timeslot));

        if !self.allocations[timeslot].try_place(instance, event) {
            return false;
        }

        self.domains[event].clear(&mut self.remaining_candidates);
        self.domains[event] = TimeslotSet::singleton(timeslot);
        self.coloring[event] = Some(timeslot);
        self.num_assigned += 1;
        true
    }

    /// Removes the candidates which became infeasible after assigning `event` to `timeslot`.
    pub(crate) fn propagate(
        &mut self,
        instance: &Instance,
        event: EventId,
        timeslot: Timeslot,
    ) -> PropagationStatus {
        timetabler_assert_simple!(self.timeslot_of(event) == Some(timeslot));

        if self.allocations[timeslot].is_full() {
            for other in instance.events() {
                if !self.is_assigned(other) {
                    let _ = self.domains[other].discard(timeslot, &mut self.remaining_candidates);
                    self.check_not_empty(other)?;
                }
            }
        } else {
            for &other in instance.conflicts(event) {
                if !self.is_assigned(other) {
                    let _ = self.domains[other].discard(timeslot, &mut self.remaining_candidates);
                    self.check_not_empty(other)?;
                }
            }
        }

        for &after in instance.events_after(event) {
            if !self.is_assigned(after) {
                self.domains[after].discard_up_to(timeslot, &mut self.remaining_candidates);
                self.check_not_empty(after)?;
            }
        }

        for &before in instance.events_before(event) {
            if !self.is_assigned(before) {
                self.domains[before].discard_from(timeslot, &mut self.remaining_candidates);
                self.check_not_empty(before)?;
            }
        }

        timetabler_assert_advanced!(self.counters_are_consistent());
        Ok(())
    }

    fn check_not_empty(&self, event: EventId) -> PropagationStatus {
        if self.domains[event].is_empty() {
            Err(EmptyDomain(event))
        } else {
            Ok(())
        }
    }

    /// Reads the timetable from a node in which every event is assigned.
    pub(crate) fn solution(&self) -> Option<Solution> {
        self.coloring
            .iter_with_keys()
            .map(|(event, timeslot)| {
                let timeslot = (*timeslot)?;
                let room = self.allocations[timeslot].room_of(event)?;
                Some((timeslot, room))
            })
            .collect::<Option<Vec<_>>>()
            .map(Solution::new)
    }

    /// Recounts the remaining candidates of every timeslot from the domains.
    fn counters_are_consistent(&self) -> bool {
        self.remaining_candidates
            .iter_with_keys()
            .all(|(timeslot, &count)| {
                let actual = self
                    .unassigned_events()
                    .filter(|&event| self.domains[event].contains(timeslot))
                    .count();
                actual == count as usize
            })
    }
}
