use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::Timeslot;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::timetabler_assert_simple;

/// The largest number of timeslots which can be represented by a [`TimeslotSet`]; a set is a
/// single machine word.
pub const MAX_NUM_TIMESLOTS: usize = u64::BITS as usize;

/// For every timeslot, the number of unassigned events which still have that timeslot as a
/// candidate.
///
/// Every discard on a [`TimeslotSet`] which actually removes a timeslot decrements the
/// corresponding counter.
pub type TimeslotCounters = KeyedVec<Timeslot, u32>;

/// A fixed-capacity set of candidate timeslots, stored as a bit-vector.
///
/// The set caches its cardinality. Removing a single timeslot keeps the cache up-to-date while
/// the bulk operations ([`TimeslotSet::discard_up_to`] and [`TimeslotSet::discard_from`])
/// invalidate it; [`TimeslotSet::cardinality`] then falls back to a population count.
///
/// Copying a set copies its bits.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeslotSet {
    bits: u64,
    /// [`None`] if the cache was invalidated by a bulk operation
    ones_count: Option<u32>,
}

impl PartialEq for TimeslotSet {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for TimeslotSet {}

impl TimeslotSet {
    /// Creates a set without any timeslots.
    pub const fn empty() -> Self {
        TimeslotSet {
            bits: 0,
            ones_count: Some(0),
        }
    }

    /// Creates the set `{0, 1, ..., num_timeslots - 1}`.
    pub fn full(num_timeslots: usize) -> Self {
        timetabler_assert_simple!(
            num_timeslots <= MAX_NUM_TIMESLOTS,
            "A timeslot set can hold at most {MAX_NUM_TIMESLOTS} timeslots but {num_timeslots} were requested"
        );

        let bits = if num_timeslots == MAX_NUM_TIMESLOTS {
            u64::MAX
        } else {
            !(u64::MAX << num_timeslots)
        };

        TimeslotSet {
            bits,
            ones_count: Some(num_timeslots as u32),
        }
    }

    /// Creates the set `{timeslot}`.
    pub fn singleton(timeslot: Timeslot) -> Self {
        TimeslotSet {
            bits: Self::mask(timeslot),
            ones_count: Some(1),
        }
    }

    fn mask(timeslot: Timeslot) -> u64 {
        timetabler_assert_simple!(
            timeslot.index() < MAX_NUM_TIMESLOTS,
            "{timeslot} does not fit in a timeslot set"
        );
        1 << timeslot.id
    }

    pub fn contains(&self, timeslot: Timeslot) -> bool {
        timeslot.index() < MAX_NUM_TIMESLOTS && self.bits & Self::mask(timeslot) != 0
    }

    /// Adds the timeslot to the set.
    ///
    /// Only meant for building sets which are not part of a search node; the candidate counters
    /// are not involved.
    pub fn insert(&mut self, timeslot: Timeslot) {
        let before = self.bits;
        self.bits |= Self::mask(timeslot);
        if before != self.bits {
            if let Some(ones_count) = self.ones_count.as_mut() {
                *ones_count += 1;
            }
        }
    }

    /// Removes `timeslot` from the set if it is present, in which case the counter of `timeslot`
    /// is decremented as well.
    ///
    /// Returns whether the timeslot was removed. Discarding an absent timeslot changes nothing.
    pub fn discard(&mut self, timeslot: Timeslot, counters: &mut TimeslotCounters) -> bool {
        let before = self.bits;
        self.bits &= !Self::mask(timeslot);
        if before == self.bits {
            return false;
        }

        if let Some(ones_count) = self.ones_count.as_mut() {
            *ones_count -= 1;
        }
        Self::decrement(counters, timeslot);
        true
    }

    /// Removes every timeslot `t <= timeslot`.
    pub fn discard_up_to(&mut self, timeslot: Timeslot, counters: &mut TimeslotCounters) {
        let keep = u64::MAX.checked_shl(timeslot.id + 1).unwrap_or(0);
        self.retain_bits(keep, counters);
    }

    /// Removes every timeslot `t >= timeslot`.
    pub fn discard_from(&mut self, timeslot: Timeslot, counters: &mut TimeslotCounters) {
        let keep = !u64::MAX.checked_shl(timeslot.id).unwrap_or(0);
        self.retain_bits(keep, counters);
    }

    /// Removes all timeslots from the set.
    pub fn clear(&mut self, counters: &mut TimeslotCounters) {
        self.retain_bits(0, counters);
        self.ones_count = Some(0);
    }

    fn retain_bits(&mut self, keep: u64, counters: &mut TimeslotCounters) {
        let removed = self.bits & !keep;
        if removed == 0 {
            return;
        }

        self.bits &= keep;
        self.ones_count = None;
        for timeslot in BitIterator(removed) {
            Self::decrement(counters, timeslot);
        }
    }

    fn decrement(counters: &mut TimeslotCounters, timeslot: Timeslot) {
        timetabler_assert_simple!(
            counters[timeslot] > 0,
            "The candidate counter of {timeslot} would drop below zero"
        );
        counters[timeslot] -= 1;
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the number of timeslots in the set.
    pub fn cardinality(&self) -> u32 {
        self.ones_count.unwrap_or_else(|| self.bits.count_ones())
    }

    /// Iterates over the timeslots in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = Timeslot> {
        BitIterator(self.bits)
    }

    /// Returns the timeslots of the set in a [`Vec`].
    pub fn to_vec(&self) -> Vec<Timeslot> {
        self.iter().collect()
    }
}

impl FromIterator<Timeslot> for TimeslotSet {
    fn from_iter<T: IntoIterator<Item = Timeslot>>(iter: T) -> Self {
        let mut set = TimeslotSet::empty();
        for timeslot in iter {
            set.insert(timeslot);
        }
        set
    }
}

impl Display for TimeslotSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, timeslot) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", timeslot.id)?;
        }
        write!(f, "}}")
    }
}

/// Yields the positions of the set bits, lowest first.
#[derive(Debug, Clone, Copy)]
struct BitIterator(u64);

impl Iterator for BitIterator {
    type Item = Timeslot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let position = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Some(Timeslot::new(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_counters(num_timeslots: usize, value: u32) -> TimeslotCounters {
        KeyedVec::from(vec![value; num_timeslots])
    }

    fn timeslots(ids: &[u32]) -> Vec<Timeslot> {
        ids.iter().copied().map(Timeslot::new).collect()
    }

    #[test]
    fn full_set_contains_exactly_the_first_timeslots() {
        let set = TimeslotSet::full(5);

        assert_eq!(set.cardinality(), 5);
        assert_eq!(set.to_vec(), timeslots(&[0, 1, 2, 3, 4]));
        assert!(!set.contains(Timeslot::new(5)));
    }

    #[test]
    fn full_set_of_a_whole_word() {
        let set = TimeslotSet::full(MAX_NUM_TIMESLOTS);

        assert_eq!(set.cardinality(), 64);
        assert!(set.contains(Timeslot::new(63)));
    }

    #[test]
    fn discard_updates_cardinality_and_counter() {
        let mut counters = new_counters(4, 3);
        let mut set = TimeslotSet::full(4);

        assert!(set.discard(Timeslot::new(2), &mut counters));

        assert_eq!(set.cardinality(), 3);
        assert!(!set.contains(Timeslot::new(2)));
        assert_eq!(counters[Timeslot::new(2)], 2);
        assert_eq!(counters[Timeslot::new(1)], 3);
    }

    #[test]
    fn discarding_an_absent_timeslot_is_a_no_op() {
        let mut counters = new_counters(4, 3);
        let mut set = TimeslotSet::full(4);
        let _ = set.discard(Timeslot::new(1), &mut counters);

        assert!(!set.discard(Timeslot::new(1), &mut counters));

        assert_eq!(set.cardinality(), 3);
        assert_eq!(counters[Timeslot::new(1)], 2);
    }

    #[test]
    fn discard_up_to_removes_the_timeslot_and_everything_before() {
        let mut counters = new_counters(6, 1);
        let mut set = TimeslotSet::full(6);

        set.discard_up_to(Timeslot::new(2), &mut counters);

        assert_eq!(set.to_vec(), timeslots(&[3, 4, 5]));
        assert_eq!(set.cardinality(), 3);
        assert_eq!(
            counters.iter().copied().collect::<Vec<_>>(),
            vec![0, 0, 0, 1, 1, 1]
        );
    }

    #[test]
    fn discard_from_removes_the_timeslot_and_everything_after() {
        let mut counters = new_counters(6, 1);
        let mut set = TimeslotSet::full(6);

        set.discard_from(Timeslot::new(2), &mut counters);

        assert_eq!(set.to_vec(), timeslots(&[0, 1]));
        assert_eq!(set.cardinality(), 2);
        assert_eq!(
            counters.iter().copied().collect::<Vec<_>>(),
            vec![1, 1, 0, 0, 0, 0]
        );
    }

    #[test]
    fn bulk_discards_at_the_word_boundary() {
        let mut counters = new_counters(64, 1);
        let mut set = TimeslotSet::full(64);

        set.discard_up_to(Timeslot::new(63), &mut counters);
        assert!(set.is_empty());

        let mut counters = new_counters(64, 1);
        let mut set = TimeslotSet::full(64);
        set.discard_from(Timeslot::new(0), &mut counters);
        assert!(set.is_empty());
    }

    #[test]
    fn single_discard_after_bulk_discard_keeps_cardinality_correct() {
        let mut counters = new_counters(8, 1);
        let mut set = TimeslotSet::full(8);

        set.discard_from(Timeslot::new(6), &mut counters);
        let _ = set.discard(Timeslot::new(0), &mut counters);

        assert_eq!(set.cardinality(), 5);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut counters = new_counters(3, 1);
        let mut set = TimeslotSet::full(3);

        set.clear(&mut counters);

        assert!(set.is_empty());
        assert_eq!(set.cardinality(), 0);
        assert_eq!(counters.iter().sum::<u32>(), 0);
    }

    #[test]
    fn copies_do_not_alias() {
        let mut counters = new_counters(3, 2);
        let original = TimeslotSet::full(3);
        let mut copy = original;

        let _ = copy.discard(Timeslot::new(0), &mut counters);

        assert!(original.contains(Timeslot::new(0)));
        assert_ne!(original, copy);
    }

    #[test]
    fn equality_ignores_the_cardinality_cache() {
        let mut counters = new_counters(4, 1);
        let mut bulk = TimeslotSet::full(4);
        bulk.discard_from(Timeslot::new(2), &mut counters);

        let collected: TimeslotSet = timeslots(&[0, 1]).into_iter().collect();

        assert_eq!(bulk, collected);
    }

    #[test]
    fn display_lists_the_timeslots() {
        let set: TimeslotSet = timeslots(&[1, 4]).into_iter().collect();

        assert_eq!(set.to_string(), "{1, 4}");
    }
}
