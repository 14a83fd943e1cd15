use std::fmt::Display;
use std::fmt::Formatter;

use crate::containers::StorageKey;

/// Identifies an event (e.g. an exam or a class) of an [`Instance`](crate::Instance).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId {
    pub id: u32,
}

impl EventId {
    pub const fn new(id: u32) -> Self {
        EventId { id }
    }
}

impl StorageKey for EventId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        EventId::new(index as u32)
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.id)
    }
}

/// Identifies a room in which events can take place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId {
    pub id: u32,
}

impl RoomId {
    pub const fn new(id: u32) -> Self {
        RoomId { id }
    }
}

impl StorageKey for RoomId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        RoomId::new(index as u32)
    }
}

impl Display for RoomId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}", self.id)
    }
}

/// A discrete period of time; timeslots are ordered, `t1 < t2` means that `t1` takes place
/// strictly before `t2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timeslot {
    pub id: u32,
}

impl Timeslot {
    pub const fn new(id: u32) -> Self {
        Timeslot { id }
    }
}

impl StorageKey for Timeslot {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        Timeslot::new(index as u32)
    }
}

impl Display for Timeslot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.id)
    }
}
