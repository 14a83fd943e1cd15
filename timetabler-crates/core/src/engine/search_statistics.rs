use std::fmt::Display;
use std::fmt::Formatter;

use itertools::Itertools;

use crate::create_statistics_struct;

create_statistics_struct!(
    /// Statistics of a single run of the timetable search.
    SearchStatistics {
        /// The number of iterations of the search loop
        num_iterations: u64,
        /// The number of times an event was tentatively placed in a timeslot
        num_decisions: u64,
        /// The number of times the search moved back to a shallower node
        num_backtracks: u64,
        /// The largest number of events which were assigned at the same time
        peak_depth: usize,
        /// The number of placements which failed since no room could be matched
        num_room_infeasibilities: u64,
        /// The number of decisions after which propagation emptied a domain
        num_domain_wipeouts: u64,
        /// For every depth, the number of times a backtrack resumed the search at that depth
        backtracks_per_level: LevelCounts,
    }
);

/// A counter per search depth.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelCounts(Vec<u64>);

impl LevelCounts {
    pub(crate) fn increment(&mut self, depth: usize) {
        if self.0.len() <= depth {
            self.0.resize(depth + 1, 0);
        }
        self.0[depth] += 1;
    }

    pub fn get(&self, depth: usize) -> u64 {
        self.0.get(depth).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }
}

impl Display for LevelCounts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().join(","))
    }
}
