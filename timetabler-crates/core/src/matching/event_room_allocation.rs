use crate::basic_types::EventId;
use crate::basic_types::RoomId;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::timetabler_assert_advanced;
use crate::timetabler_assert_simple;
use crate::Instance;

/// The largest number of rooms supported by an [`EventRoomAllocation`]; the rooms visited during
/// a single placement attempt are marked in one machine word.
pub const MAX_NUM_ROOMS: usize = u64::BITS as usize;

/// A matching between the events which are placed in a single timeslot and the rooms.
///
/// Every matched event occupies exactly one of its candidate rooms and every room is occupied by
/// at most one event. Placing an event may move previously placed events to other rooms (along an
/// augmenting path); events are never removed from the matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRoomAllocation {
    occupants: KeyedVec<RoomId, Option<EventId>>,
    used_rooms: u32,
}

impl EventRoomAllocation {
    pub fn new(num_rooms: usize) -> Self {
        timetabler_assert_simple!(
            num_rooms <= MAX_NUM_ROOMS,
            "At most {MAX_NUM_ROOMS} rooms are supported but {num_rooms} were requested"
        );

        EventRoomAllocation {
            occupants: KeyedVec::from(vec![None; num_rooms]),
            used_rooms: 0,
        }
    }

    pub fn num_rooms(&self) -> usize {
        self.occupants.len()
    }

    /// The number of rooms which are occupied; equal to the number of matched events.
    pub fn used_rooms(&self) -> u32 {
        self.used_rooms
    }

    /// Whether every room is occupied.
    pub fn is_full(&self) -> bool {
        self.used_rooms as usize == self.num_rooms()
    }

    pub fn occupant(&self, room: RoomId) -> Option<EventId> {
        self.occupants[room]
    }

    /// The room which is currently assigned to `event`, if it is placed in this timeslot.
    pub fn room_of(&self, event: EventId) -> Option<RoomId> {
        self.occupants
            .iter_with_keys()
            .find(|(_, occupant)| **occupant == Some(event))
            .map(|(room, _)| room)
    }

    /// Iterates over the occupied rooms together with their events.
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, EventId)> + '_ {
        self.occupants
            .iter_with_keys()
            .filter_map(|(room, occupant)| occupant.map(|event| (room, event)))
    }

    /// Attempts to extend the matching with `event`, restricted to its candidate rooms.
    ///
    /// Returns `true` if `event` now occupies a room, in which case [`Self::used_rooms`] has been
    /// incremented. If `false` is returned then the matching is unchanged.
    pub fn try_place(&mut self, instance: &Instance, event: EventId) -> bool {
        timetabler_assert_simple!(
            self.room_of(event).is_none(),
            "{event} is already placed in this timeslot"
        );

        let mut visited_rooms = 0_u64;
        let placed = self.find_augmenting_path(instance, event, &mut visited_rooms);
        if placed {
            self.used_rooms += 1;
        }

        timetabler_assert_advanced!(self.is_consistent(instance));
        placed
    }

    /// Kuhn's depth-first search for an augmenting path starting at `event`.
    ///
    /// Occupants are only reassigned while unwinding a successful search. The recursion depth is
    /// bounded by the number of rooms since every room is visited at most once.
    fn find_augmenting_path(
        &mut self,
        instance: &Instance,
        event: EventId,
        visited_rooms: &mut u64,
    ) -> bool {
        for &room in instance.candidate_rooms(event) {
            let mask = 1_u64 << room.index();
            if *visited_rooms & mask != 0 {
                continue;
            }
            *visited_rooms |= mask;

            let can_take_room = match self.occupants[room] {
                None => true,
                Some(occupant) => self.find_augmenting_path(instance, occupant, visited_rooms),
            };
            if can_take_room {
                self.occupants[room] = Some(event);
                return true;
            }
        }

        false
    }

    fn is_consistent(&self, instance: &Instance) -> bool {
        let mut matched = 0;
        for (room, event) in self.iter() {
            if instance.candidate_rooms(event).binary_search(&room).is_err() {
                return false;
            }
            if self.iter().filter(|&(_, other)| other == event).count() != 1 {
                return false;
            }
            matched += 1;
        }
        matched == self.used_rooms
    }
}
